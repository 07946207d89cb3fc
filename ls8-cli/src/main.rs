//! LS-8 CLI: run, assemble and disassemble programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage, input, load or assembly error
//! - 3: Runtime error

use std::process;

use log::LevelFilter;
use ls8_cli::{commands, logger};

fn main() {
    logger::init(LevelFilter::Warn);

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "assemble" => commands::assemble(&args[2..]),
        "disassemble" => commands::disassemble(&args[2..]),
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
    eprintln!("Usage: ls8 <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <prog.ls8> [--trace]                  Load and execute a program");
    eprintln!("  assemble <input.asm> [-o output.ls8]      Assemble mnemonics to a .ls8 listing");
    eprintln!("  disassemble <prog.ls8> [--addresses]      Disassemble a .ls8 listing");
}
