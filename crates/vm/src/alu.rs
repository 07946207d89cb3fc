//! Arithmetic/logic unit.
//!
//! The ALU is a pure function of an operation and two register values. It
//! never touches PC, memory or the register file; the engine decides where
//! the outcome goes. All arithmetic wraps at 8 bits.

use ls8_common::Opcode;
use thiserror::Error;

use crate::error::RuntimeError;

/// Condition flags written by CMP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub equal: bool,
    pub greater: bool,
    pub less: bool,
}

impl Flags {
    /// Flags for comparing `a` against `b`. Exactly one is set.
    pub fn compare(a: u8, b: u8) -> Self {
        Self {
            equal: a == b,
            greater: a > b,
            less: a < b,
        }
    }
}

/// Where an ALU result goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOutcome {
    /// Store into the destination register (operand A).
    Store(u8),
    /// Replace the condition flags.
    Flags(Flags),
}

/// ALU failures. The engine attaches the instruction address with
/// [`AluError::at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AluError {
    #[error("unsupported ALU operation {}", .0.mnemonic())]
    UnsupportedOperation(Opcode),

    #[error("division by zero")]
    DivisionByZero,
}

impl AluError {
    /// The runtime error for this failure at instruction address `at`.
    pub fn at(self, at: u8) -> RuntimeError {
        match self {
            AluError::UnsupportedOperation(opcode) => {
                RuntimeError::UnsupportedOperation { opcode, at }
            }
            AluError::DivisionByZero => RuntimeError::DivisionByZero { at },
        }
    }
}

/// Apply `op` to register values `a` (operand A) and `b` (operand B).
///
/// # Errors
///
/// [`AluError::UnsupportedOperation`] for non-ALU opcodes and
/// [`AluError::DivisionByZero`] for MOD by zero.
pub fn alu(op: Opcode, a: u8, b: u8) -> Result<AluOutcome, AluError> {
    let value = match op {
        Opcode::Add => a.wrapping_add(b),
        Opcode::Mul => a.wrapping_mul(b),
        Opcode::Mod => a.checked_rem(b).ok_or(AluError::DivisionByZero)?,
        Opcode::And => a & b,
        Opcode::Or => a | b,
        Opcode::Xor => a ^ b,
        // Shifting by the full width or more clears the register.
        Opcode::Shl => a.checked_shl(b as u32).unwrap_or(0),
        Opcode::Shr => a.checked_shr(b as u32).unwrap_or(0),
        Opcode::Not => !b,
        Opcode::Cmp => return Ok(AluOutcome::Flags(Flags::compare(a, b))),
        other => return Err(AluError::UnsupportedOperation(other)),
    };
    Ok(AluOutcome::Store(value))
}
