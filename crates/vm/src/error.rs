//! Runtime errors for the LS-8 VM.
//!
//! Every error is fatal for the current run: the machine halts and hands the
//! error back to its caller. Errors raised by the engine carry the address of
//! the faulting instruction (`at`).

use ls8_common::Opcode;
use thiserror::Error;

/// Errors that occur while loading or executing a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Memory address outside `0..MEMORY_SIZE`.
    #[error("memory address {address:#x} out of bounds")]
    OutOfBounds { address: usize },

    /// The program does not fit in memory.
    #[error("program of {len} bytes exceeds memory capacity of {capacity} bytes")]
    ProgramTooLarge { len: usize, capacity: usize },

    /// The byte at PC is not an instruction.
    #[error("unsupported opcode {opcode:#04x} at address {at:#04x}")]
    UnsupportedOpcode { opcode: u8, at: u8 },

    /// The ALU was asked to perform an operation it does not implement.
    #[error("unsupported ALU operation {} at address {at:#04x}", .opcode.mnemonic())]
    UnsupportedOperation { opcode: Opcode, at: u8 },

    /// POP with nothing on the stack.
    #[error("stack underflow at address {at:#04x}")]
    StackUnderflow { at: u8 },

    /// A register operand outside R0-R7.
    #[error("invalid register R{index} at address {at:#04x}")]
    InvalidRegister { index: u8, at: u8 },

    /// MOD with a zero divisor.
    #[error("division by zero at address {at:#04x}")]
    DivisionByZero { at: u8 },

    /// The output channel rejected a write.
    #[error("output channel failed: {0}")]
    Output(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            RuntimeError::OutOfBounds { address: 256 }.to_string(),
            "memory address 0x100 out of bounds"
        );
        assert_eq!(
            RuntimeError::ProgramTooLarge {
                len: 300,
                capacity: 256
            }
            .to_string(),
            "program of 300 bytes exceeds memory capacity of 256 bytes"
        );
        assert_eq!(
            RuntimeError::UnsupportedOpcode {
                opcode: 0xff,
                at: 0x0a
            }
            .to_string(),
            "unsupported opcode 0xff at address 0x0a"
        );
        assert_eq!(
            RuntimeError::UnsupportedOperation {
                opcode: Opcode::Ldi,
                at: 0x10
            }
            .to_string(),
            "unsupported ALU operation LDI at address 0x10"
        );
        assert_eq!(
            RuntimeError::StackUnderflow { at: 4 }.to_string(),
            "stack underflow at address 0x04"
        );
        assert_eq!(
            RuntimeError::InvalidRegister { index: 9, at: 3 }.to_string(),
            "invalid register R9 at address 0x03"
        );
        assert_eq!(
            RuntimeError::DivisionByZero { at: 6 }.to_string(),
            "division by zero at address 0x06"
        );
    }
}
