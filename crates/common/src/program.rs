//! Program representation for LS-8 byte streams.
//!
//! A program is the ordered byte sequence the loader copies into memory
//! starting at address 0. It may mix instructions and data.

use crate::instruction::Instruction;

/// Size of the LS-8 address space in bytes.
pub const MEMORY_SIZE: usize = 256;

/// An LS-8 program: raw memory image starting at address 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The byte stream.
    pub bytes: Vec<u8>,
}

impl Program {
    /// Create a program from raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Build a program by encoding instructions back to back.
    pub fn from_instructions(instructions: &[Instruction]) -> Self {
        let mut bytes = Vec::new();
        for instr in instructions {
            bytes.extend_from_slice(&instr.encode());
        }
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the program.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the program has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::Opcode;

    #[test]
    fn empty_program() {
        let program = Program::default();
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
    }

    #[test]
    fn from_instructions_concatenates() {
        let program = Program::from_instructions(&[
            Instruction::new(Opcode::Ldi, 0, 8),
            Instruction::new(Opcode::Prn, 0, 0),
            Instruction::new(Opcode::Hlt, 0, 0),
        ]);
        assert_eq!(program.as_bytes(), &[0x82, 0, 8, 0x47, 0, 0x01]);
    }
}
