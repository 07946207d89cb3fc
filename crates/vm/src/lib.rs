//! LS-8 virtual machine: executes 8-bit byte-code programs.
//!
//! The VM is a register machine with:
//! - 256 bytes of unified code/data memory
//! - Eight 8-bit general-purpose registers and a downward-growing stack
//! - Equal/Greater/Less flags written by CMP and read by JEQ/JNE
//!
//! # Usage
//!
//! ```
//! use ls8_vm::run;
//!
//! // LDI R0,8; PRN R0; HLT
//! let output = run(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
//! assert_eq!(output, vec![8]);
//! ```

pub mod alu;
pub mod error;
pub mod execute;
pub mod machine;
pub mod memory;
pub mod output;
pub mod registers;

pub use alu::{alu, AluError, AluOutcome, Flags};
pub use error::RuntimeError;
pub use machine::{Cpu, State, STACK_START};
pub use memory::{Memory, MEMORY_SIZE};
pub use output::{Output, WriteOutput};
pub use registers::{Registers, REGISTER_COUNT};

/// Load and run a program, collecting every PRN value.
///
/// # Errors
///
/// Returns [`RuntimeError`] if the program does not fit in memory or
/// execution faults (unknown opcode, stack underflow, etc.).
pub fn run(program: &[u8]) -> Result<Vec<u8>, RuntimeError> {
    let mut cpu = Cpu::new(Vec::new());
    cpu.load(program)?;
    cpu.run()?;
    Ok(cpu.into_output())
}
