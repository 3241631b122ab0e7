//! Command-line interface for cram
//! This binary restructures a raw study-text file into exam-ready notes.
//!
//! Usage:
//!   cram `<path>` `[format]`           - Restructure a file and output to stdout
//!   cram process `<path>` `[format]`   - Same as the default command
//!   cram formats                   - List all available output formats
//!
//! A path of `-` reads from stdin.

use clap::{Arg, Command};
use cram::cram::processor::{
    available_formats, process_file, process_source, OutputFormat, ProcessingError,
};
use std::io::Read;
use std::path::PathBuf;

fn main() {
    let matches = Command::new("cram")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Restructure raw study text into exam-ready notes")
        .subcommand_required(false)
        .arg_required_else_help(true)
        // Default command args
        .arg(
            Arg::new("path")
                .help("Path to the text file to restructure (\"-\" for stdin)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .help("Output format (json, yaml, summary); defaults to json")
                .index(2),
        )
        // Subcommands
        .subcommand(
            Command::new("process")
                .about("Restructure a file and output to stdout (default command)")
                .arg(
                    Arg::new("path")
                        .help("Path to the text file to restructure (\"-\" for stdin)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .help("Output format (json, yaml, summary); defaults to json")
                        .index(2),
                ),
        )
        .subcommand(Command::new("formats").about("List all available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("process", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            run(path, sub.get_one::<String>("format").map(String::as_str));
        }
        Some(("formats", _)) => list_formats(),
        _ => match matches.get_one::<String>("path") {
            Some(path) => run(path, matches.get_one::<String>("format").map(String::as_str)),
            None => {
                eprintln!("No input path provided");
                std::process::exit(1);
            }
        },
    }
}

fn run(path: &str, format: Option<&str>) {
    let format = match OutputFormat::from_string(format.unwrap_or("json")) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let result = if path == "-" {
        let mut source = String::new();
        match std::io::stdin().read_to_string(&mut source) {
            Ok(_) => process_source(&source, format),
            Err(e) => Err(ProcessingError::IoError(e.to_string())),
        }
    } else {
        process_file(&PathBuf::from(path), format)
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn list_formats() {
    println!("Available formats:");
    for (name, description) in available_formats() {
        println!("  {:<10} {}", name, description);
    }
}
