// Criterion benchmarks for caps.
//
// Run:
//   cargo bench -p caps

use std::hint::black_box;

use caps::{Caps, CapsConfig, NumberRules, ReplaceStyle, Tokenizer};
use criterion::{Criterion, criterion_group, criterion_main};

const INPUT: &str = "Example Uuid.";

const IDENTIFIERS: &[&str] = &[
    "someJsonValue",
    "MarshalJSON",
    "serve_http_request",
    "XMLHttpRequest",
    "user-id-2048",
    "ParseUTF8Header",
    "remote_ip_addr",
    "TCPConnectionTTLSeconds",
];

// ---------------------------------------------------------------------------
// Style conversions on a single input
// ---------------------------------------------------------------------------

fn bench_styles(c: &mut Criterion) {
    let caps = Caps::default();
    let mut group = c.benchmark_group("style");

    group.bench_function("title", |b| b.iter(|| caps.to_title(black_box(INPUT))));
    group.bench_function("camel", |b| b.iter(|| caps.to_camel(black_box(INPUT))));
    group.bench_function("lower_camel", |b| {
        b.iter(|| caps.to_lower_camel(black_box(INPUT)))
    });
    group.bench_function("snake", |b| b.iter(|| caps.to_snake(black_box(INPUT))));
    group.bench_function("screaming_snake", |b| {
        b.iter(|| caps.to_screaming_snake(black_box(INPUT)))
    });
    group.bench_function("kebab", |b| b.iter(|| caps.to_kebab(black_box(INPUT))));
    group.bench_function("screaming_kebab", |b| {
        b.iter(|| caps.to_screaming_kebab(black_box(INPUT)))
    });
    group.bench_function("dot_notation", |b| {
        b.iter(|| caps.to_dot_notation(black_box(INPUT)))
    });
    group.bench_function("screaming_dot_notation", |b| {
        b.iter(|| caps.to_screaming_dot_notation(black_box(INPUT)))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Mixed identifiers
// ---------------------------------------------------------------------------

fn bench_identifiers(c: &mut Criterion) {
    let caps = Caps::default();
    let camel_caps = CapsConfig::new()
        .replace_style(ReplaceStyle::Camel)
        .build();

    c.bench_function("snake_8_identifiers", |b| {
        b.iter(|| {
            for ident in IDENTIFIERS {
                black_box(caps.to_snake(ident));
            }
        });
    });

    c.bench_function("camel_8_identifiers_replace_camel", |b| {
        b.iter(|| {
            for ident in IDENTIFIERS {
                black_box(camel_caps.to_camel(ident));
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Tokenizer alone
// ---------------------------------------------------------------------------

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer: Tokenizer = Tokenizer::default();
    let rules = NumberRules::default();

    c.bench_function("tokenize_8_identifiers", |b| {
        b.iter(|| {
            for ident in IDENTIFIERS {
                black_box(tokenizer.tokenize(black_box(ident), "", &rules));
            }
        });
    });
}

criterion_group!(benches, bench_styles, bench_identifiers, bench_tokenize);
criterion_main!(benches);
