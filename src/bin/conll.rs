//! Command-line interface for conll
//!
//! Usage:
//!   conll `<path>`  - Parse a corpus file and print a JSON summary

use clap::{Arg, Command};
use conll::conll::reader::CorpusReader;

fn main() {
    let matches = Command::new("conll")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Summarize a CoNLL NER corpus file")
        .arg(
            Arg::new("path")
                .help("Path to the corpus file")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();

    let reader = CorpusReader::new(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let parsed = reader.parse_full().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = serde_json::to_string_pretty(&parsed.summary()).unwrap_or_else(|e| {
        eprintln!("Error serializing summary: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}
