//! Flat byte-addressable memory shared by code, data and the stack.

pub use ls8_common::MEMORY_SIZE;

use crate::error::RuntimeError;

/// 256 bytes of RAM, zeroed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Read the byte at `address`.
    ///
    /// Returns [`RuntimeError::OutOfBounds`] for addresses past the end.
    pub fn read(&self, address: usize) -> Result<u8, RuntimeError> {
        self.cells
            .get(address)
            .copied()
            .ok_or(RuntimeError::OutOfBounds { address })
    }

    /// Write `value` at `address`.
    ///
    /// Returns [`RuntimeError::OutOfBounds`] for addresses past the end.
    pub fn write(&mut self, address: usize, value: u8) -> Result<(), RuntimeError> {
        let cell = self
            .cells
            .get_mut(address)
            .ok_or(RuntimeError::OutOfBounds { address })?;
        *cell = value;
        Ok(())
    }

    /// Read through an 8-bit address. Always in bounds.
    pub(crate) fn fetch(&self, address: u8) -> u8 {
        self.cells[address as usize]
    }

    /// Write through an 8-bit address. Always in bounds.
    pub(crate) fn store(&mut self, address: u8, value: u8) {
        self.cells[address as usize] = value;
    }

    /// Copy `program` into memory starting at address 0.
    ///
    /// The size check happens before any byte is written, so a rejected
    /// program leaves memory untouched.
    pub fn load(&mut self, program: &[u8]) -> Result<(), RuntimeError> {
        if program.len() > MEMORY_SIZE {
            return Err(RuntimeError::ProgramTooLarge {
                len: program.len(),
                capacity: MEMORY_SIZE,
            });
        }
        self.cells[..program.len()].copy_from_slice(program);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let mem = Memory::new();
        assert!(mem.as_slice().iter().all(|&b| b == 0));
        assert_eq!(mem.as_slice().len(), MEMORY_SIZE);
    }

    #[test]
    fn read_write_in_bounds() {
        let mut mem = Memory::new();
        mem.write(0, 1).unwrap();
        mem.write(255, 2).unwrap();
        assert_eq!(mem.read(0), Ok(1));
        assert_eq!(mem.read(255), Ok(2));
    }

    #[test]
    fn read_out_of_bounds() {
        let mem = Memory::new();
        assert_eq!(
            mem.read(256),
            Err(RuntimeError::OutOfBounds { address: 256 })
        );
    }

    #[test]
    fn write_out_of_bounds_leaves_memory_alone() {
        let mut mem = Memory::new();
        assert_eq!(
            mem.write(1000, 7),
            Err(RuntimeError::OutOfBounds { address: 1000 })
        );
        assert_eq!(mem, Memory::new());
    }

    #[test]
    fn load_places_program_at_zero() {
        let mut mem = Memory::new();
        mem.load(&[0x82, 0x00, 0x08]).unwrap();
        assert_eq!(&mem.as_slice()[..4], &[0x82, 0x00, 0x08, 0x00]);
    }

    #[test]
    fn load_exactly_full() {
        let mut mem = Memory::new();
        let program = vec![0xAB; MEMORY_SIZE];
        mem.load(&program).unwrap();
        assert_eq!(mem.as_slice(), &program[..]);
    }

    #[test]
    fn load_too_large_is_rejected_without_writes() {
        let mut mem = Memory::new();
        let program = vec![0xAB; MEMORY_SIZE + 1];
        assert_eq!(
            mem.load(&program),
            Err(RuntimeError::ProgramTooLarge {
                len: 257,
                capacity: 256
            })
        );
        assert_eq!(mem, Memory::new());
    }

    #[test]
    fn fetch_and_store_use_eight_bit_addresses() {
        let mut mem = Memory::new();
        mem.store(0xFF, 9);
        assert_eq!(mem.fetch(0xFF), 9);
        assert_eq!(mem.read(255), Ok(9));
    }
}
