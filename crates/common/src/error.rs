//! Decode errors for LS-8 instruction streams.

use thiserror::Error;

/// Errors that occur while decoding raw bytes into instructions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The byte does not name any instruction in the catalog.
    #[error("unsupported opcode: {0:#04x}")]
    UnsupportedOpcode(u8),

    /// A register operand names a register outside R0-R7.
    #[error("invalid register index: {0}")]
    InvalidRegister(u8),

    /// The byte stream ended before all operands of an instruction.
    #[error("{mnemonic} needs {width} byte(s), only {available} available")]
    Truncated {
        mnemonic: &'static str,
        width: usize,
        available: usize,
    },
}
