//! Instruction encoding and decoding for the LS-8 instruction set.
//!
//! Instructions are variable width, one to three bytes:
//! ```text
//! Byte 0: opcode
//! Byte 1: operand A (register index or immediate), if any
//! Byte 2: operand B (register index or immediate), if any
//! ```

use std::fmt;

use crate::error::DecodeError;
use crate::opcode::{Opcode, OperandKind};
use crate::register::Register;

/// A single decoded LS-8 instruction.
///
/// Operands the opcode does not use are stored as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// Operand A.
    pub a: u8,
    /// Operand B.
    pub b: u8,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(opcode: Opcode, a: u8, b: u8) -> Self {
        Self { opcode, a, b }
    }

    /// Encode this instruction to exactly `opcode.width()` bytes.
    pub fn encode(&self) -> Vec<u8> {
        let bytes = [self.opcode as u8, self.a, self.b];
        bytes[..self.opcode.width() as usize].to_vec()
    }

    /// Decode the instruction at the start of `bytes`.
    ///
    /// Trailing bytes beyond the instruction width are ignored. Register
    /// operands are validated; immediates accept any value.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let first = *bytes.first().ok_or(DecodeError::Truncated {
            mnemonic: "instruction",
            width: 1,
            available: 0,
        })?;
        let opcode = Opcode::try_from(first)?;

        let width = opcode.width() as usize;
        if bytes.len() < width {
            return Err(DecodeError::Truncated {
                mnemonic: opcode.mnemonic(),
                width,
                available: bytes.len(),
            });
        }

        let mut operands = [0u8; 2];
        for (slot, kind) in opcode.operands().iter().enumerate() {
            let byte = bytes[slot + 1];
            if *kind == OperandKind::Register {
                Register::new(byte)?;
            }
            operands[slot] = byte;
        }

        Ok(Self::new(opcode, operands[0], operands[1]))
    }

    /// Number of bytes this instruction occupies.
    pub fn width(&self) -> usize {
        self.opcode.width() as usize
    }
}

/// Canonical assembly text, e.g. `LDI R0,8` or `MUL R0,R1`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.opcode.mnemonic())?;
        let values = [self.a, self.b];
        for (slot, kind) in self.opcode.operands().iter().enumerate() {
            let sep = if slot == 0 { " " } else { "," };
            match kind {
                OperandKind::Register => write!(f, "{sep}R{}", values[slot])?,
                OperandKind::Immediate => write!(f, "{sep}{}", values[slot])?,
            }
        }
        Ok(())
    }
}
