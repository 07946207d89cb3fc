//! CLI command implementations.
//!
//! Every command returns `Err(exit_code)` after printing its own diagnostic.

use std::fs;
use std::io;

use log::LevelFilter;
use ls8_common::Program;
use ls8_vm::{Cpu, RuntimeError, WriteOutput};

/// Exit code for usage, I/O, load and assembly errors.
pub const EXIT_INPUT: i32 = 1;
/// Exit code for faults during execution.
pub const EXIT_RUNTIME: i32 = 3;

/// Load a .ls8 listing and execute it, printing PRN output to stdout.
pub fn run(args: &[String]) -> Result<(), i32> {
    let mut input = None;
    let mut trace = false;
    for arg in args {
        match arg.as_str() {
            "--trace" => trace = true,
            flag if flag.starts_with("--") => {
                eprintln!("error: unknown flag '{flag}'");
                return Err(EXIT_INPUT);
            }
            path if input.is_none() => input = Some(path),
            extra => return Err(unexpected_argument(extra)),
        }
    }

    let Some(input) = input else {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: ls8 run <prog.ls8> [--trace]");
        return Err(EXIT_INPUT);
    };

    if trace {
        log::set_max_level(LevelFilter::Trace);
    }

    let program = read_program(input)?;

    let mut cpu = Cpu::new(WriteOutput::new(io::stdout().lock()));
    cpu.load(program.as_bytes()).map_err(|e| {
        eprintln!("error: {e}");
        EXIT_INPUT
    })?;

    cpu.run().map_err(|e| {
        eprintln!("runtime error: {e}");
        runtime_exit_code(&e)
    })
}

/// Assemble mnemonic source into a .ls8 listing.
pub fn assemble(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: assemble requires an input file");
        eprintln!("Usage: ls8 assemble <input.asm> [-o output.ls8]");
        return Err(EXIT_INPUT);
    }

    let input = &args[0];

    // Parse -o flag
    let output = if args.len() >= 3 && args[1] == "-o" {
        args[2].clone()
    } else if let Some(stem) = input.strip_suffix(".asm") {
        format!("{stem}.ls8")
    } else {
        format!("{input}.ls8")
    };

    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        EXIT_INPUT
    })?;

    let program = ls8_asm::assemble(&text).map_err(|e| {
        eprintln!("error: {e}");
        EXIT_INPUT
    })?;

    fs::write(&output, ls8_asm::to_ls8(&program)).map_err(|e| {
        eprintln!("error: cannot write '{output}': {e}");
        EXIT_INPUT
    })?;

    eprintln!("assembled {} bytes -> {output}", program.len());
    Ok(())
}

/// Disassemble a .ls8 listing to mnemonic text.
pub fn disassemble(args: &[String]) -> Result<(), i32> {
    let mut input = None;
    let mut addresses = false;
    for arg in args {
        match arg.as_str() {
            "--addresses" => addresses = true,
            flag if flag.starts_with("--") => {
                eprintln!("error: unknown flag '{flag}'");
                return Err(EXIT_INPUT);
            }
            path if input.is_none() => input = Some(path),
            extra => return Err(unexpected_argument(extra)),
        }
    }

    let Some(input) = input else {
        eprintln!("error: disassemble requires an input file");
        eprintln!("Usage: ls8 disassemble <prog.ls8> [--addresses]");
        return Err(EXIT_INPUT);
    };

    let program = read_program(input)?;
    let text = if addresses {
        ls8_asm::listing(&program)
    } else {
        ls8_asm::disassemble(&program)
    };
    print!("{text}");
    Ok(())
}

// --- Helpers ---

/// Read and parse a .ls8 listing.
fn read_program(path: &str) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        EXIT_INPUT
    })?;

    ls8_asm::parse_ls8(&text).map_err(|e| {
        eprintln!("error: {path}: {e}");
        EXIT_INPUT
    })
}

fn unexpected_argument(arg: &str) -> i32 {
    eprintln!("error: unexpected argument '{arg}'");
    EXIT_INPUT
}

/// Output failures are I/O problems, not program faults.
fn runtime_exit_code(error: &RuntimeError) -> i32 {
    match error {
        RuntimeError::Output(_) => EXIT_INPUT,
        _ => EXIT_RUNTIME,
    }
}
