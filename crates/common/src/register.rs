//! General-purpose register names.

use crate::error::DecodeError;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// A validated register index, R0 through R7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(u8);

impl Register {
    /// Validate a raw operand byte as a register index.
    pub fn new(index: u8) -> Result<Self, DecodeError> {
        if (index as usize) < REGISTER_COUNT {
            Ok(Self(index))
        } else {
            Err(DecodeError::InvalidRegister(index))
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_r0_through_r7() {
        for i in 0..8u8 {
            assert_eq!(Register::new(i).unwrap().index(), i);
        }
    }

    #[test]
    fn rejects_eight_and_above() {
        assert_eq!(Register::new(8), Err(DecodeError::InvalidRegister(8)));
        assert_eq!(Register::new(255), Err(DecodeError::InvalidRegister(255)));
    }
}
