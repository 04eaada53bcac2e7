// caps-convert: Convert identifiers between casing styles.
//
// Converts each TEXT argument, or each line of stdin when no TEXT is given,
// and prints one result per line.
//
// Usage:
//   caps-convert [OPTIONS] STYLE [TEXT...]
//
// Options:
//   -a, --allowed SYMBOLS         Keep these symbols inside words
//   -r, --replace-style STYLE     camel | screaming | lower
//   -t, --table PATH              Extra replacements (JSON), also $CAPS_REPLACEMENTS
//   --caser NAME                  unicode | turkish | azeri
//   -h, --help                    Print help

use std::io::{self, BufRead, Write};

use caps_cli::{Options, OutputStyle};

fn main() {
    caps_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if caps_cli::wants_help(&args) {
        println!("caps-convert: Convert identifiers between casing styles.");
        println!();
        println!("Usage: caps-convert [OPTIONS] STYLE [TEXT...]");
        println!();
        println!("Converts each TEXT, or each stdin line when none is given.");
        println!();
        println!("Styles:");
        println!("  {}", OutputStyle::NAMES.join(", "));
        println!();
        println!("Options:");
        println!("  -a, --allowed SYMBOLS       Keep these symbols inside words");
        println!("  -r, --replace-style STYLE   camel | screaming | lower (default screaming)");
        println!("  -t, --table PATH            Extra replacements as a JSON array of");
        println!("                              {{\"camel\": .., \"screaming\": ..}} objects");
        println!("                              (default: $CAPS_REPLACEMENTS)");
        println!("  --caser NAME                unicode | turkish | azeri");
        println!("  -h, --help                  Print this help");
        println!();
        println!("Set CAPS_LOG=debug to log to stderr.");
        return;
    }

    let opts = Options::parse(&args).unwrap_or_else(|e| caps_cli::fatal(&e.to_string()));
    let Some((style, texts)) = opts.positional.split_first() else {
        caps_cli::fatal("missing output style (see --help)");
    };
    let style: OutputStyle = style
        .parse()
        .unwrap_or_else(|e: caps_cli::CliError| caps_cli::fatal(&e.to_string()));
    let caps = opts
        .build_caps()
        .unwrap_or_else(|e| caps_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if texts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line =
                line.unwrap_or_else(|e| caps_cli::fatal(&format!("failed to read stdin: {e}")));
            let _ = writeln!(out, "{}", style.apply(&caps, &line));
        }
    } else {
        for text in texts {
            let _ = writeln!(out, "{}", style.apply(&caps, text));
        }
    }
}
