//! Command-line interface for snakeshift
//! This binary converts CamelCase words in a text file to upper snake case.
//!
//! Usage:
//!   snakeshift `<input>` `<output>`   - Convert input file, write result to output file

use clap::{Arg, Command};

fn main() {
    let matches = Command::new("snakeshift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert CamelCase words in a text file to upper snake case")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the text file to convert")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path to write the converted text to (created or overwritten)")
                .required(true)
                .index(2),
        )
        .get_matches();

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = matches
        .get_one::<String>("output")
        .expect("output is required");

    let lines = snakeshift::process_file(input, output).unwrap_or_else(|e| {
        eprintln!("Conversion error: {}", e);
        std::process::exit(1);
    });

    println!("Converted words written to {} ({} lines)", output, lines);
}
