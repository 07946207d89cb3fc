//! Error types for the LS-8 text formats.

use thiserror::Error;

/// Errors produced while reading a `.ls8` byte listing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The line is not a binary literal.
    #[error("line {line}: '{token}' is not a binary byte")]
    InvalidDigit { line: usize, token: String },

    /// The literal has more than eight binary digits.
    #[error("line {line}: '{token}' is wider than 8 bits")]
    ValueTooWide { line: usize, token: String },
}

/// Errors produced during assembly of text to bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// An unrecognized opcode mnemonic was encountered.
    #[error("line {line}: unknown opcode '{token}'")]
    UnknownOpcode { line: usize, token: String },

    /// An opcode did not have enough operands.
    #[error("line {line}: {opcode} expects {expected} operand(s)")]
    MissingArgument {
        line: usize,
        opcode: &'static str,
        expected: usize,
    },

    /// A numeric literal could not be parsed or does not fit in a byte.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// A register operand was expected but something else was found.
    #[error("line {line}: expected register R0-R7, found '{token}'")]
    InvalidRegister { line: usize, token: String },

    /// A token appeared where it was not expected.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },

    /// A label was referenced but never defined.
    #[error("line {line}: undefined label '{label}'")]
    UndefinedLabel { line: usize, label: String },

    /// A label was defined twice.
    #[error("line {line}: label '{label}' already defined")]
    DuplicateLabel { line: usize, label: String },

    /// The assembled image does not fit in memory.
    #[error("program of {size} bytes exceeds memory capacity of {capacity} bytes")]
    ProgramTooLarge { size: usize, capacity: usize },
}
