//! GLEAM CLI: bind, check, run and format contract bytecode.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/load/bind error
//! - 2: Verification failure
//! - 3: Runtime error
//! - 4: Out of gas

mod commands;
mod host;
mod logging;

use std::process;

fn main() {
    let mut args: Vec<String> = std::env::args().collect();

    let before = args.len();
    args.retain(|a| a != "-v" && a != "--verbose");
    logging::init(args.len() != before);

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "bind" => commands::bind(&args[2..]),
        "check" => commands::check(&args[2..]),
        "run" => commands::run(&args[2..]),
        "fmt" => commands::fmt(&args[2..]),
        "block" => commands::block(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: gleam [-v] <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  bind <template> --arg k=v... [-o out.gleam]   Bind placeholders, write staged bytecode");
    eprintln!("  check <file>                                  Load and verify bytecode");
    eprintln!("  run <file> [--arg k=v]... [--gas N] [--no-verify]");
    eprintln!("                                                Evaluate and print the returned value");
    eprintln!("  fmt <file>                                    Print canonical bytecode");
    eprintln!("  block [--timestamp MS]                        Print a serialized genesis block");
    eprintln!();
    eprintln!("Set GLEAM_LOG (e.g. GLEAM_LOG=debug) to control logging; -v implies debug.");
}
