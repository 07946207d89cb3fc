//! Integration tests for the LS-8 text formats.
//!
//! Tests cover:
//! - The sample programs in `tests/programs` (parse, assemble, execute)
//! - Roundtrip properties (disassemble → assemble, to_ls8 → parse_ls8)
//! - Every opcode through disassemble → assemble

use std::fs;
use std::path::{Path, PathBuf};

use ls8_asm::{assemble, disassemble, parse_ls8, to_ls8, AsmError};
use ls8_common::opcode::ALL_OPCODES;
use ls8_common::{Instruction, Program, MEMORY_SIZE};
use proptest::prelude::*;

// ---- Test helpers ----

fn program_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/programs")
        .join(name)
}

fn read_program(name: &str) -> String {
    fs::read_to_string(program_path(name)).unwrap()
}

fn run_ls8(name: &str) -> Result<Vec<u8>, ls8_vm::RuntimeError> {
    let program = parse_ls8(&read_program(name)).unwrap();
    ls8_vm::run(program.as_bytes())
}

// ---- Sample programs ----

#[test]
fn print8_prints_8() {
    assert_eq!(run_ls8("print8.ls8"), Ok(vec![8]));
}

#[test]
fn mult_prints_72() {
    assert_eq!(run_ls8("mult.ls8"), Ok(vec![72]));
}

#[test]
fn stack_prints_2_4_1() {
    assert_eq!(run_ls8("stack.ls8"), Ok(vec![2, 4, 1]));
}

#[test]
fn sctest_prints_1_4_5() {
    assert_eq!(run_ls8("sctest.ls8"), Ok(vec![1, 4, 5]));
}

#[test]
fn underflow_faults() {
    assert_eq!(
        run_ls8("underflow.ls8"),
        Err(ls8_vm::RuntimeError::StackUnderflow { at: 3 })
    );
}

#[test]
fn sctest_source_assembles_to_listing() {
    let from_source = assemble(&read_program("sctest.asm")).unwrap();
    let from_listing = parse_ls8(&read_program("sctest.ls8")).unwrap();
    assert_eq!(from_source, from_listing);
}

#[test]
fn sample_listings_disassemble_and_reassemble() {
    for name in ["print8.ls8", "mult.ls8", "stack.ls8", "sctest.ls8", "underflow.ls8"] {
        let program = parse_ls8(&read_program(name)).unwrap();
        let text = disassemble(&program);
        assert_eq!(assemble(&text).unwrap(), program, "roundtrip failed for {name}");
    }
}

// ---- Opcodes ----

#[test]
fn all_opcodes_roundtrip() {
    for &opcode in &ALL_OPCODES {
        let program = Program::new(Instruction::new(opcode, 1, 2).encode());
        let text = disassemble(&program);
        assert_eq!(assemble(&text).unwrap(), program, "roundtrip failed for {text}");
    }
}

#[test]
fn mnemonics_are_case_insensitive() {
    let upper = assemble("LDI R0,8\nPRN R0\nHLT\n").unwrap();
    let lower = assemble("ldi r0,8\nprn r0\nhlt\n").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn assembled_program_runs() {
    let text = "\
        LDI R0,3
        LDI R1,0
        LDI R2,0xFF
        LDI R3,loop
loop:   PRN R0
        ADD R0,R2       ; R0 -= 1
        CMP R0,R1
        JNE R3
        HLT
";
    let program = assemble(text).unwrap();
    assert_eq!(ls8_vm::run(program.as_bytes()), Ok(vec![3, 2, 1]));
}

#[test]
fn error_invalid_register_reports_line() {
    let err = assemble("LDI R0,1\nPUSH R9\n").unwrap_err();
    assert_eq!(
        err,
        AsmError::InvalidRegister {
            line: 2,
            token: "R9".to_string()
        }
    );
}

// ---- Properties ----

proptest! {
    /// Any memory image survives disassemble → assemble unchanged.
    #[test]
    fn disassemble_assemble_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..=MEMORY_SIZE)) {
        let program = Program::new(bytes);
        let text = disassemble(&program);
        prop_assert_eq!(assemble(&text).unwrap(), program);
    }

    /// Any memory image survives the `.ls8` listing format unchanged.
    #[test]
    fn ls8_listing_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let program = Program::new(bytes);
        prop_assert_eq!(parse_ls8(&to_ls8(&program)).unwrap(), program);
    }
}
