//! VM state: memory, registers, stack pointer, flags and run state.

use std::fmt::Write as _;

use crate::alu::Flags;
use crate::error::RuntimeError;
use crate::memory::Memory;
use crate::output::Output;
use crate::registers::Registers;

/// Initial stack pointer. The stack grows down from here; SP at this value
/// means nothing has been pushed.
pub const STACK_START: u8 = 0xF4;

/// Execution state of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

/// The LS-8 virtual CPU.
///
/// Owns its memory, registers and output channel. Instances share nothing.
pub struct Cpu<O: Output> {
    pub(crate) memory: Memory,
    pub(crate) registers: Registers,
    /// Program counter.
    pub(crate) pc: u8,
    /// Stack pointer.
    pub(crate) sp: u8,
    pub(crate) flags: Flags,
    pub(crate) state: State,
    pub(crate) output: O,
}

impl<O: Output> Cpu<O> {
    /// Create a powered-on machine writing PRN values to `output`.
    pub fn new(output: O) -> Self {
        Self {
            memory: Memory::new(),
            registers: Registers::new(),
            pc: 0,
            sp: STACK_START,
            flags: Flags::default(),
            state: State::Running,
            output,
        }
    }

    /// Copy a program into memory at address 0.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::ProgramTooLarge`] if `program` does not fit; memory is
    /// left as it was.
    pub fn load(&mut self, program: &[u8]) -> Result<(), RuntimeError> {
        self.memory.load(program)?;
        log::debug!("loaded {} bytes", program.len());
        Ok(())
    }

    /// One-line dump of PC, the next three bytes and all registers.
    pub fn trace(&self) -> String {
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.memory.fetch(self.pc),
            self.memory.fetch(self.pc.wrapping_add(1)),
            self.memory.fetch(self.pc.wrapping_add(2)),
        );
        for value in self.registers.as_slice() {
            let _ = write!(line, " {value:02X}");
        }
        line
    }

    pub fn pc(&self) -> u8 {
        self.pc
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
