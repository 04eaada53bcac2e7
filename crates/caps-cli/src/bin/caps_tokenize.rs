// caps-tokenize: Print the word tokens of each stdin line.
//
// Usage:
//   caps-tokenize [OPTIONS]
//
// Options:
//   -a, --allowed SYMBOLS   Keep these symbols inside words
//   --caser NAME            unicode | turkish | azeri
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use caps::{NumberRules, Tokenizer};
use caps_cli::Options;

fn main() {
    caps_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if caps_cli::wants_help(&args) {
        println!("caps-tokenize: Split identifiers into word tokens.");
        println!();
        println!("Usage: caps-tokenize [OPTIONS]");
        println!();
        println!("Reads lines from stdin, prints each token on its own line:");
        println!("  [  index]: <token>");
        println!("Lines are separated by a blank line.");
        println!();
        println!("Options:");
        println!("  -a, --allowed SYMBOLS   Keep these symbols inside words");
        println!("  --caser NAME            unicode | turkish | azeri");
        println!("  -h, --help              Print this help");
        return;
    }

    let opts = Options::parse(&args).unwrap_or_else(|e| caps_cli::fatal(&e.to_string()));
    if let Some(extra) = opts.positional.first() {
        caps_cli::fatal(&format!("unexpected argument: {extra}"));
    }

    let tokenizer = Tokenizer::new(caps::DEFAULT_DELIMITERS, opts.caser);
    let rules = NumberRules::default();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (n, line) in io::stdin().lock().lines().enumerate() {
        let line = line.unwrap_or_else(|e| caps_cli::fatal(&format!("failed to read stdin: {e}")));
        if n > 0 {
            let _ = writeln!(out);
        }
        for (i, token) in tokenizer.tokenize(&line, &opts.allowed, &rules).iter().enumerate() {
            let _ = writeln!(out, "[{i:>4}]: {}", caps_cli::escape(&token.to_string()));
        }
    }
}
