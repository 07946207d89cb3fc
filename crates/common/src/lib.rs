//! LS-8 common types and instruction encoding.
//!
//! This crate provides the foundational data structures for the LS-8
//! instruction set:
//!
//! - [`Opcode`]: the 19 opcodes and their operand layouts
//! - [`Register`]: a validated R0-R7 index
//! - [`Instruction`]: one decoded instruction with encode/decode
//! - [`Program`]: the byte image loaded into memory
//! - [`DecodeError`]: errors from decoding byte streams

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::Instruction;
pub use opcode::{Opcode, OperandKind};
pub use program::{Program, MEMORY_SIZE};
pub use register::{Register, REGISTER_COUNT};
