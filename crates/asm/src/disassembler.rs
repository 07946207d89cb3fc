//! Disassembler: program bytes → canonical assembly text.
//!
//! Linear sweep from address 0. Bytes that do not start a valid
//! instruction, or whose operands run past the end, become `DB` lines.

use ls8_common::{Instruction, Program};

use crate::parser::DATA_BYTE;

/// One decoded unit of a program image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Item {
    Instruction(Instruction),
    Byte(u8),
}

/// Decode `program` into (address, item) pairs.
pub(crate) fn sweep(program: &Program) -> Vec<(usize, Item)> {
    let bytes = program.as_bytes();
    let mut items = Vec::new();
    let mut addr = 0;

    while addr < bytes.len() {
        match Instruction::decode(&bytes[addr..]) {
            Ok(instr) => {
                items.push((addr, Item::Instruction(instr)));
                addr += instr.width();
            }
            Err(_) => {
                items.push((addr, Item::Byte(bytes[addr])));
                addr += 1;
            }
        }
    }

    items
}

/// Disassemble a program into canonical assembly text.
///
/// The output is guaranteed to reassemble to identical bytes
/// (`assemble(disassemble(program)) == program`).
pub fn disassemble(program: &Program) -> String {
    let mut out = String::new();
    for (_, item) in sweep(program) {
        match item {
            Item::Instruction(instr) => out.push_str(&instr.to_string()),
            Item::Byte(byte) => out.push_str(&format!("{DATA_BYTE} 0x{byte:02x}")),
        }
        out.push('\n');
    }
    out
}

/// Disassembly with a hex address column, for display only.
pub fn listing(program: &Program) -> String {
    let mut out = String::new();
    for (addr, item) in sweep(program) {
        let text = match item {
            Item::Instruction(instr) => instr.to_string(),
            Item::Byte(byte) => format!("{DATA_BYTE} 0x{byte:02x}"),
        };
        out.push_str(&format!("{addr:02x}: {text}\n"));
    }
    out
}
