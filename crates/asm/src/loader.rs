//! Reader and writer for the `.ls8` byte listing format.
//!
//! A `.ls8` file holds one byte per line as a binary literal. `#` starts a
//! comment; blank lines are ignored:
//!
//! ```text
//! # print8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! ```

use ls8_common::Program;

use crate::disassembler::Item;
use crate::error::LoadError;

/// Parse a `.ls8` listing into a program.
///
/// Returns the first malformed line as an error. Size is not checked here;
/// the VM rejects programs that do not fit in memory.
pub fn parse_ls8(text: &str) -> Result<Program, LoadError> {
    let mut bytes = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let token = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        if token.is_empty() {
            continue;
        }
        if !token.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(LoadError::InvalidDigit {
                line: line_num,
                token: token.to_string(),
            });
        }
        if token.len() > 8 {
            return Err(LoadError::ValueTooWide {
                line: line_num,
                token: token.to_string(),
            });
        }

        let byte = u8::from_str_radix(token, 2).map_err(|_| LoadError::InvalidDigit {
            line: line_num,
            token: token.to_string(),
        })?;
        bytes.push(byte);
    }

    log::debug!("parsed {} bytes", bytes.len());
    Ok(Program::new(bytes))
}

/// Render a program as a `.ls8` listing.
///
/// Each instruction's opcode line carries its disassembly as a comment.
pub fn to_ls8(program: &Program) -> String {
    let mut out = String::new();

    for (_, item) in crate::disassembler::sweep(program) {
        match item {
            Item::Instruction(instr) => {
                let bytes = instr.encode();
                out.push_str(&format!("{:08b} # {instr}\n", bytes[0]));
                for byte in &bytes[1..] {
                    out.push_str(&format!("{byte:08b}\n"));
                }
            }
            Item::Byte(byte) => out.push_str(&format!("{byte:08b}\n")),
        }
    }

    out
}
