//! LS-8 text formats: `.ls8` listings, assembly and disassembly.
//!
//! Three translations, all between text and a [`Program`] byte image:
//!
//! - [`parse_ls8`] / [`to_ls8`]: the one-binary-byte-per-line `.ls8` format
//! - [`assemble`]: mnemonic assembly (`LDI R0,8`) with labels and `DB`
//! - [`disassemble`]: canonical mnemonic text from bytes
//!
//! # Usage
//!
//! ```
//! use ls8_asm::{assemble, disassemble};
//!
//! let text = "LDI R0,8\nPRN R0\nHLT\n";
//! let program = assemble(text).unwrap();
//! assert_eq!(program.as_bytes(), &[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
//! assert_eq!(disassemble(&program), text);
//! ```
//!
//! # Roundtrip Guarantee
//!
//! `assemble(disassemble(program)) == program` holds for every byte image
//! that fits in memory.

pub mod error;
pub mod loader;

mod disassembler;
mod lexer;
mod parser;

pub use disassembler::{disassemble, listing};
pub use error::{AsmError, LoadError};
pub use loader::{parse_ls8, to_ls8};

use std::collections::HashMap;

use lexer::tokenize_line;
use ls8_common::{Program, MEMORY_SIZE};
use parser::{parse_line, Statement, Value};

/// Assemble text into a program image.
///
/// Two passes: the first assigns addresses and collects labels, the second
/// resolves label references. Returns the first error encountered.
pub fn assemble(text: &str) -> Result<Program, AsmError> {
    let mut statements = Vec::new();
    let mut labels: HashMap<String, usize> = HashMap::new();
    let mut addr = 0;

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let tokens = tokenize_line(line, line_num)?;
        let parsed = parse_line(&tokens, line_num)?;

        if let Some(label) = parsed.label {
            if labels.contains_key(&label) {
                return Err(AsmError::DuplicateLabel {
                    line: line_num,
                    label,
                });
            }
            labels.insert(label, addr);
        }
        if let Some(statement) = parsed.statement {
            addr += statement.width();
            statements.push((line_num, statement));
        }
    }

    if addr > MEMORY_SIZE {
        return Err(AsmError::ProgramTooLarge {
            size: addr,
            capacity: MEMORY_SIZE,
        });
    }

    let resolve = |value: &Value, line_num: usize| -> Result<u8, AsmError> {
        match value {
            Value::Byte(b) => Ok(*b),
            Value::Label(name) => {
                let target = *labels.get(name).ok_or_else(|| AsmError::UndefinedLabel {
                    line: line_num,
                    label: name.clone(),
                })?;
                // A label just past a full image has no 8-bit address.
                u8::try_from(target).map_err(|_| AsmError::InvalidNumber {
                    line: line_num,
                    token: name.clone(),
                })
            }
        }
    };

    let mut bytes = Vec::with_capacity(addr);
    for (line_num, statement) in &statements {
        match statement {
            Statement::Instruction { opcode, operands } => {
                bytes.push(*opcode as u8);
                for operand in operands {
                    bytes.push(resolve(operand, *line_num)?);
                }
            }
            Statement::Byte(value) => bytes.push(resolve(value, *line_num)?),
        }
    }

    log::debug!("assembled {} statements into {} bytes", statements.len(), bytes.len());
    Ok(Program::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_print8() {
        let program = assemble("LDI R0,8\nPRN R0\nHLT\n").unwrap();
        assert_eq!(program.as_bytes(), &[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
    }

    #[test]
    fn assemble_with_comments_and_blanks() {
        let text = "\
; print the product of 5 and 4

LDI R0,5   ; a
LDI R1,4   # b
MUL R0,R1
PRN R0
HLT
";
        let program = assemble(text).unwrap();
        assert_eq!(program.len(), 12);
    }

    #[test]
    fn forward_and_backward_labels() {
        let text = "\
        LDI R1,end
start:  JMP R1
        DB 0xFF
end:    LDI R2,start
        HLT
";
        let program = assemble(text).unwrap();
        assert_eq!(
            program.as_bytes(),
            &[0x82, 0x01, 0x06, 0x54, 0x01, 0xFF, 0x82, 0x02, 0x03, 0x01]
        );
    }

    #[test]
    fn label_on_its_own_line() {
        let program = assemble("top:\nLDI R0,top\nHLT\n").unwrap();
        assert_eq!(program.as_bytes(), &[0x82, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn error_undefined_label() {
        assert_eq!(
            assemble("HLT\nLDI R0,nowhere\n"),
            Err(AsmError::UndefinedLabel {
                line: 2,
                label: "NOWHERE".to_string()
            })
        );
    }

    #[test]
    fn error_duplicate_label() {
        assert_eq!(
            assemble("a: HLT\na: HLT\n"),
            Err(AsmError::DuplicateLabel {
                line: 2,
                label: "A".to_string()
            })
        );
    }

    #[test]
    fn error_reports_correct_line() {
        let err = assemble("HLT\nFOOBAR\n").unwrap_err();
        assert!(matches!(err, AsmError::UnknownOpcode { line: 2, .. }));
    }

    #[test]
    fn error_program_too_large() {
        let text = "LDI R0,0\n".repeat(86);
        assert_eq!(
            assemble(&text),
            Err(AsmError::ProgramTooLarge {
                size: 258,
                capacity: 256
            })
        );
    }

    #[test]
    fn full_memory_is_accepted() {
        let text = "DB 1\n".repeat(256);
        assert_eq!(assemble(&text).unwrap().len(), 256);
    }

    #[test]
    fn label_past_full_image_cannot_be_loaded() {
        let mut text = "LDI R0,end\n".to_string();
        text.push_str(&"DB 0\n".repeat(253));
        text.push_str("end:\n");
        assert!(matches!(
            assemble(&text),
            Err(AsmError::InvalidNumber { line: 1, .. })
        ));
    }
}
