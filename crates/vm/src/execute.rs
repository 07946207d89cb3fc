//! Fetch-decode-execute loop and opcode dispatch.

use ls8_common::Opcode;

use crate::alu::{alu, AluOutcome};
use crate::error::RuntimeError;
use crate::machine::{Cpu, State, STACK_START};
use crate::output::Output;

impl<O: Output> Cpu<O> {
    /// Run until HLT or error.
    ///
    /// There is no step limit: a program that loops forever runs forever.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while !self.is_halted() {
            self.step()?;
        }
        Ok(())
    }

    /// Execute exactly one instruction.
    ///
    /// A halted machine stays halted and does nothing. Any error halts the
    /// machine before it is returned.
    pub fn step(&mut self) -> Result<State, RuntimeError> {
        if self.is_halted() {
            return Ok(State::Halted);
        }

        let at = self.pc;
        // Operands are always prefetched; the opcode decides how many count.
        let ir = self.memory.fetch(at);
        let operand_a = self.memory.fetch(at.wrapping_add(1));
        let operand_b = self.memory.fetch(at.wrapping_add(2));
        log::trace!("{}", self.trace());

        match self.dispatch(at, ir, operand_a, operand_b) {
            Ok(()) => {
                if self.is_halted() {
                    log::debug!("halted at {at:#04x}");
                }
                Ok(self.state)
            }
            Err(e) => {
                self.state = State::Halted;
                log::debug!("fault at {at:#04x}: {e}");
                Err(e)
            }
        }
    }

    fn dispatch(&mut self, at: u8, ir: u8, a: u8, b: u8) -> Result<(), RuntimeError> {
        let opcode =
            Opcode::try_from(ir).map_err(|_| RuntimeError::UnsupportedOpcode { opcode: ir, at })?;

        match opcode {
            Opcode::Nop => {}
            Opcode::Hlt => {
                self.state = State::Halted;
                return Ok(());
            }
            Opcode::Ldi => self.write_reg(at, a, b)?,
            Opcode::Prn => {
                let value = self.read_reg(at, a)?;
                self.output.emit(value)?;
            }
            Opcode::Push => self.exec_push(at, a)?,
            Opcode::Pop => self.exec_pop(at, a)?,
            Opcode::Jmp => self.exec_branch(at, a, true)?,
            Opcode::Jeq => self.exec_branch(at, a, self.flags.equal)?,
            Opcode::Jne => self.exec_branch(at, a, !self.flags.equal)?,
            Opcode::Add
            | Opcode::Mul
            | Opcode::Mod
            | Opcode::Cmp
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Shl
            | Opcode::Shr
            | Opcode::Not => self.exec_alu(at, opcode, a, b)?,
        }

        if !opcode.sets_pc() {
            self.pc = self.pc.wrapping_add(opcode.width());
        }
        Ok(())
    }

    fn read_reg(&self, at: u8, index: u8) -> Result<u8, RuntimeError> {
        self.registers
            .get(index)
            .map_err(|_| RuntimeError::InvalidRegister { index, at })
    }

    fn write_reg(&mut self, at: u8, index: u8, value: u8) -> Result<(), RuntimeError> {
        self.registers
            .set(index, value)
            .map_err(|_| RuntimeError::InvalidRegister { index, at })
    }

    fn exec_alu(&mut self, at: u8, op: Opcode, a: u8, b: u8) -> Result<(), RuntimeError> {
        let lhs = self.read_reg(at, a)?;
        let rhs = self.read_reg(at, b)?;
        match alu(op, lhs, rhs).map_err(|e| e.at(at))? {
            AluOutcome::Store(value) => self.write_reg(at, a, value)?,
            AluOutcome::Flags(flags) => self.flags = flags,
        }
        Ok(())
    }

    fn exec_push(&mut self, at: u8, a: u8) -> Result<(), RuntimeError> {
        let value = self.read_reg(at, a)?;
        self.sp = self.sp.wrapping_sub(1);
        self.memory.store(self.sp, value);
        Ok(())
    }

    fn exec_pop(&mut self, at: u8, a: u8) -> Result<(), RuntimeError> {
        if self.sp == STACK_START {
            return Err(RuntimeError::StackUnderflow { at });
        }
        let value = self.memory.fetch(self.sp);
        self.write_reg(at, a, value)?;
        self.sp = self.sp.wrapping_add(1);
        Ok(())
    }

    /// Jump to reg[A] when `taken`, otherwise fall through past the operand.
    fn exec_branch(&mut self, at: u8, a: u8, taken: bool) -> Result<(), RuntimeError> {
        let target = self.read_reg(at, a)?;
        self.pc = if taken {
            target
        } else {
            self.pc.wrapping_add(Opcode::Jeq.width())
        };
        Ok(())
    }
}
