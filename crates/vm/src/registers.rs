//! General-purpose register file.

use ls8_common::{DecodeError, Register};
pub use ls8_common::REGISTER_COUNT;

/// Eight 8-bit registers, R0-R7, all zero at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    regs: [u8; REGISTER_COUNT],
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value in register `index`.
    ///
    /// Returns [`DecodeError::InvalidRegister`] if `index` is not R0-R7.
    pub fn get(&self, index: u8) -> Result<u8, DecodeError> {
        let reg = Register::new(index)?;
        Ok(self.regs[reg.index() as usize])
    }

    /// Stores `value` in register `index`.
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), DecodeError> {
        let reg = Register::new(index)?;
        self.regs[reg.index() as usize] = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.regs
    }
}
