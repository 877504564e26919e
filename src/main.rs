//! Primer Language CLI
//!
//! Command-line driver for the Primer front end: parses a script and prints
//! its AST, or dumps the raw token sequence.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use primer_lang::{parse_source, tokenize, Diagnostic, VERSION};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 1 {
        // No arguments: start REPL
        println!("Primer v{} - Language Front End", VERSION);
        println!("Type 'exit' to quit\n");
        repl();
        return;
    }

    // Check for flags
    let mut show_tokens = false;
    let mut show_help = false;
    let mut filename: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--tokens" | "-t" => show_tokens = true,
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    if let Some(file) = filename {
        let result = if show_tokens {
            show_file_tokens(file)
        } else {
            run_file(file)
        };

        if let Err(e) = result {
            eprintln!("{}", e);
            process::exit(1);
        }
    } else {
        eprintln!("Error: No input file specified");
        print_usage();
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: primer [OPTIONS] [script]");
    eprintln!("       primer --help");
}

fn print_help() {
    println!("Primer v{} - front end for a small C-like teaching language", VERSION);
    println!();
    println!("USAGE:");
    println!("    primer [OPTIONS] [script]");
    println!();
    println!("OPTIONS:");
    println!("    -t, --tokens    Show tokenization output (lexer only)");
    println!("    -h, --help      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    primer script.prm           Parse a script and print its AST");
    println!("    primer --tokens script.prm  Show tokens from the lexer");
    println!("    primer                      Start interactive REPL");
}

/// Parse a script file and print its AST
fn run_file(filename: &str) -> Result<(), String> {
    let source = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?;

    let program = parse_source(&source)
        .map_err(|e| Diagnostic::with_source(e, &source).to_string())?;

    println!("{:#?}", program);
    Ok(())
}

/// Show tokens from lexing a file
fn show_file_tokens(filename: &str) -> Result<(), String> {
    let source = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?;

    let tokens =
        tokenize(&source).map_err(|e| Diagnostic::with_source(e, &source).to_string())?;

    println!("Tokens for '{}':", filename);
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        println!(
            "{:4}: {:14} {:>7} | {:?}",
            i,
            token.kind.to_string(),
            token.location.to_string(),
            token.text
        );
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());

    Ok(())
}

/// Start an interactive REPL (Read-Eval-Print Loop)
fn repl() {
    let mut line_number = 1;

    loop {
        print!("primer:{} > ", line_number);
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = input.trim();

                if input == "exit" || input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                match parse_source(input) {
                    Ok(program) => println!("{:#?}", program),
                    Err(e) => eprintln!("{}", Diagnostic::with_source(e, input)),
                }

                line_number += 1;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}
