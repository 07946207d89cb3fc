//! Output channel for PRN.

use std::io::Write;

use crate::error::RuntimeError;

/// Receives the value of every executed PRN, in program order.
pub trait Output {
    fn emit(&mut self, value: u8) -> Result<(), RuntimeError>;
}

/// Collects values in memory.
impl Output for Vec<u8> {
    fn emit(&mut self, value: u8) -> Result<(), RuntimeError> {
        self.push(value);
        Ok(())
    }
}

impl<O: Output + ?Sized> Output for &mut O {
    fn emit(&mut self, value: u8) -> Result<(), RuntimeError> {
        (**self).emit(value)
    }
}

/// Writes each value as a decimal line and flushes immediately.
#[derive(Debug)]
pub struct WriteOutput<W: Write> {
    writer: W,
}

impl<W: Write> WriteOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Output for WriteOutput<W> {
    fn emit(&mut self, value: u8) -> Result<(), RuntimeError> {
        writeln!(self.writer, "{value}")
            .and_then(|()| self.writer.flush())
            .map_err(|e| RuntimeError::Output(e.to_string()))
    }
}
