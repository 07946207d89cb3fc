//! Opcode definitions for the LS-8 instruction set.
//!
//! Opcode bytes follow the LS-8 reference encoding. The upper two bits of
//! most opcodes carry the operand count, but the width table here is the
//! authority: NOT, for instance, occupies three bytes.

use crate::error::DecodeError;

/// Identifies the operation to perform.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Machine control
    /// No operation.
    Nop = 0x00,
    /// Stop execution.
    Hlt = 0x01,

    // Register and output
    /// Load immediate B into register A.
    Ldi = 0x82,
    /// Print register A as a decimal integer.
    Prn = 0x47,

    // ALU
    /// reg[A] = reg[A] + reg[B].
    Add = 0xA0,
    /// reg[A] = reg[A] * reg[B].
    Mul = 0xA2,
    /// reg[A] = reg[A] % reg[B].
    Mod = 0xA4,
    /// Compare reg[A] with reg[B], setting exactly one of E/G/L.
    Cmp = 0xA7,
    /// reg[A] = reg[A] & reg[B].
    And = 0xA8,
    /// reg[A] = reg[A] | reg[B].
    Or = 0xAA,
    /// reg[A] = reg[A] ^ reg[B].
    Xor = 0xAB,
    /// reg[A] = reg[A] << reg[B].
    Shl = 0xAC,
    /// reg[A] = reg[A] >> reg[B].
    Shr = 0xAD,
    /// reg[A] = !reg[B].
    Not = 0x69,

    // Stack
    /// Push register A onto the stack.
    Push = 0x45,
    /// Pop the top of the stack into register A.
    Pop = 0x46,

    // Control flow
    /// Jump to the address held in register A.
    Jmp = 0x54,
    /// Jump to reg[A] if the equal flag is set.
    Jeq = 0x55,
    /// Jump to reg[A] if the equal flag is clear.
    Jne = 0x56,
}

/// What an operand byte means for a given opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// Index of a general-purpose register (R0-R7).
    Register,
    /// Raw 8-bit value.
    Immediate,
}

/// All valid opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 19] = [
    Opcode::Nop,
    Opcode::Hlt,
    Opcode::Ldi,
    Opcode::Prn,
    Opcode::Add,
    Opcode::Mul,
    Opcode::Mod,
    Opcode::Cmp,
    Opcode::And,
    Opcode::Or,
    Opcode::Xor,
    Opcode::Shl,
    Opcode::Shr,
    Opcode::Not,
    Opcode::Push,
    Opcode::Pop,
    Opcode::Jmp,
    Opcode::Jeq,
    Opcode::Jne,
];

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Opcode::Nop),
            0x01 => Ok(Opcode::Hlt),

            0x82 => Ok(Opcode::Ldi),
            0x47 => Ok(Opcode::Prn),

            0xA0 => Ok(Opcode::Add),
            0xA2 => Ok(Opcode::Mul),
            0xA4 => Ok(Opcode::Mod),
            0xA7 => Ok(Opcode::Cmp),
            0xA8 => Ok(Opcode::And),
            0xAA => Ok(Opcode::Or),
            0xAB => Ok(Opcode::Xor),
            0xAC => Ok(Opcode::Shl),
            0xAD => Ok(Opcode::Shr),
            0x69 => Ok(Opcode::Not),

            0x45 => Ok(Opcode::Push),
            0x46 => Ok(Opcode::Pop),

            0x54 => Ok(Opcode::Jmp),
            0x55 => Ok(Opcode::Jeq),
            0x56 => Ok(Opcode::Jne),

            _ => Err(DecodeError::UnsupportedOpcode(value)),
        }
    }
}

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::Hlt => "HLT",
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Mod => "MOD",
            Opcode::Cmp => "CMP",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
            Opcode::Not => "NOT",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
        }
    }

    /// Look up an opcode by its (upper-case) mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == mnemonic)
            .copied()
    }

    /// Operand layout, in encoding order.
    pub fn operands(&self) -> &'static [OperandKind] {
        use OperandKind::{Immediate, Register};
        match self {
            Opcode::Nop | Opcode::Hlt => &[],
            Opcode::Ldi => &[Register, Immediate],
            Opcode::Prn | Opcode::Push | Opcode::Pop => &[Register],
            Opcode::Jmp | Opcode::Jeq | Opcode::Jne => &[Register],
            Opcode::Add
            | Opcode::Mul
            | Opcode::Mod
            | Opcode::Cmp
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Shl
            | Opcode::Shr
            | Opcode::Not => &[Register, Register],
        }
    }

    /// Number of bytes the instruction occupies, opcode included.
    ///
    /// For jumps this is the not-taken advance of JEQ/JNE.
    pub fn width(&self) -> u8 {
        1 + self.operands().len() as u8
    }

    /// True for instructions that write PC themselves when they execute.
    pub fn sets_pc(&self) -> bool {
        matches!(self, Opcode::Jmp | Opcode::Jeq | Opcode::Jne)
    }

    /// True for operations handled by the ALU.
    pub fn is_alu(&self) -> bool {
        matches!(
            self,
            Opcode::Add
                | Opcode::Mul
                | Opcode::Mod
                | Opcode::Cmp
                | Opcode::And
                | Opcode::Or
                | Opcode::Xor
                | Opcode::Shl
                | Opcode::Shr
                | Opcode::Not
        )
    }
}
