//! CLI command implementations.

use crate::host::CliHost;
use gleam_common::Program;
use gleam_ledger::Block;
use gleam_vm::{Outcome, DEFAULT_GAS_LIMIT};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Flags shared by the commands. Each command reads the ones it needs.
#[derive(Debug, Default)]
struct Options {
    positional: Vec<String>,
    bindings: BTreeMap<String, String>,
    output: Option<String>,
    gas: Option<u64>,
    timestamp: Option<i64>,
    no_verify: bool,
}

fn parse_options(args: &[String]) -> Result<Options, i32> {
    let mut opts = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--arg" => {
                let pair = flag_value(&mut iter, "--arg")?;
                let Some((name, value)) = pair.split_once('=') else {
                    eprintln!("error: --arg expects name=value, got '{pair}'");
                    return Err(1);
                };
                opts.bindings.insert(name.to_string(), value.to_string());
            }
            "-o" => opts.output = Some(flag_value(&mut iter, "-o")?.to_string()),
            "--gas" => opts.gas = Some(parse_number(flag_value(&mut iter, "--gas")?, "--gas")?),
            "--timestamp" => {
                opts.timestamp = Some(parse_number(
                    flag_value(&mut iter, "--timestamp")?,
                    "--timestamp",
                )?)
            }
            "--no-verify" => opts.no_verify = true,
            flag if flag.starts_with("--") => {
                eprintln!("error: unknown flag '{flag}'");
                return Err(1);
            }
            _ => opts.positional.push(arg.clone()),
        }
    }

    Ok(opts)
}

fn flag_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a str, i32> {
    iter.next().map(String::as_str).ok_or_else(|| {
        eprintln!("error: {flag} requires a value");
        1
    })
}

fn parse_number<T: std::str::FromStr>(text: &str, flag: &str) -> Result<T, i32> {
    text.parse().map_err(|_| {
        eprintln!("error: {flag} expects a number, got '{text}'");
        1
    })
}

/// Bind a template's placeholders and write the staged `.gleam` file.
pub fn bind(args: &[String]) -> Result<(), i32> {
    let opts = parse_options(args)?;
    let Some(input) = opts.positional.first() else {
        eprintln!("error: bind requires a template file");
        eprintln!("Usage: gleam bind <template> --arg name=value... [-o output.gleam]");
        return Err(1);
    };

    let output = match &opts.output {
        Some(path) => path.clone(),
        None => Path::new(input)
            .with_extension("gleam")
            .to_string_lossy()
            .into_owned(),
    };
    if output == *input {
        eprintln!("error: output would overwrite the template '{input}'; pass -o");
        return Err(1);
    }

    let template = read_text(input)?;
    let program = gleam_assembler::compile(&template, &opts.bindings).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    fs::write(&output, gleam_assembler::render(&program)).map_err(|e| {
        eprintln!("error: cannot write '{output}': {e}");
        1
    })?;

    eprintln!("bound {} lines -> {output}", program.len());
    Ok(())
}

/// Load and verify a bytecode file.
pub fn check(args: &[String]) -> Result<(), i32> {
    let opts = parse_options(args)?;
    let Some(input) = opts.positional.first() else {
        eprintln!("error: check requires an input file");
        eprintln!("Usage: gleam check <file>");
        return Err(1);
    };

    let program = load_file(input, &opts.bindings)?;
    verify(&program)?;

    println!(
        "OK: {input} ({} lines, {} labels)",
        program.len(),
        program.labels().count()
    );
    Ok(())
}

/// Evaluate a bytecode file and print the returned value.
pub fn run(args: &[String]) -> Result<(), i32> {
    let opts = parse_options(args)?;
    let Some(input) = opts.positional.first() else {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: gleam run <file> [--arg name=value]... [--gas N] [--no-verify]");
        return Err(1);
    };

    let program = load_file(input, &opts.bindings)?;
    if !opts.no_verify {
        verify(&program)?;
    }

    let gas_limit = opts.gas.unwrap_or(DEFAULT_GAS_LIMIT);
    let mut host = CliHost;
    let mut vm = gleam_vm::VM::new(&program, gas_limit, &mut host);

    match vm.evaluate() {
        Ok(outcome) => {
            debug!(gas_used = vm.gas_used(), gas_limit, "run finished");
            match outcome {
                Outcome::Returned(value) => println!("{value}"),
                Outcome::EndOfProgram => println!("undefined"),
            }
            Ok(())
        }
        Err(e) if e.is_out_of_gas() => {
            eprintln!("runtime error: {e}");
            Err(4)
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Print the canonical rendering of a bytecode file.
pub fn fmt(args: &[String]) -> Result<(), i32> {
    let opts = parse_options(args)?;
    let Some(input) = opts.positional.first() else {
        eprintln!("error: fmt requires an input file");
        eprintln!("Usage: gleam fmt <file>");
        return Err(1);
    };

    let program = load_file(input, &opts.bindings)?;
    print!("{}", gleam_assembler::render(&program));
    Ok(())
}

/// Print a serialized genesis block, usable as a TIMESTAMP argument.
pub fn block(args: &[String]) -> Result<(), i32> {
    let opts = parse_options(args)?;
    let timestamp = match opts.timestamp {
        Some(ms) => ms,
        None => now_millis()?,
    };

    let serialized = Block::genesis(timestamp).serialize().map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;
    println!("{serialized}");
    Ok(())
}

// ---- Helpers ----

fn read_text(path: &str) -> Result<String, i32> {
    fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })
}

/// Read and load a file, binding any `--arg` values first.
fn load_file(path: &str, bindings: &BTreeMap<String, String>) -> Result<Program, i32> {
    let text = read_text(path)?;
    gleam_assembler::compile(&text, bindings).map_err(|e| {
        eprintln!("error: {path}: {e}");
        1
    })
}

fn verify(program: &Program) -> Result<(), i32> {
    gleam_verifier::verify(program).map_err(|errors| {
        for e in &errors {
            eprintln!("error: {e}");
        }
        2
    })
}

fn now_millis() -> Result<i64, i32> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| i64::try_from(d.as_millis()).ok())
        .ok_or_else(|| {
            eprintln!("error: system clock is before the Unix epoch");
            1
        })
}
