//! Intcode Instruction Set
//!
//! An instruction occupies `1 + arity` consecutive words:
//!
//! ```text
//! [modes..][opcode:2]  p0  p1  p2
//!    ^ decimal digits, least significant mode belongs to p0
//! ```
//!
//! `1002,4,3,4` is MUL with modes (position, immediate, position).

use serde::{Deserialize, Serialize};

use crate::mode::AddressingMode;
use crate::opcode::Opcode;
use crate::{Word, MODE_RADIX, OPCODE_DIVISOR};

/// Largest arity of any opcode
pub const MAX_ARITY: usize = 3;

/// One raw parameter word together with its addressing mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub value: Word,
    pub mode: AddressingMode,
}

impl Parameter {
    pub const fn new(value: Word, mode: AddressingMode) -> Self {
        Self { value, mode }
    }

    pub const fn position(address: Word) -> Self {
        Self::new(address, AddressingMode::Position)
    }

    pub const fn immediate(value: Word) -> Self {
        Self::new(value, AddressingMode::Immediate)
    }

    pub const fn relative(offset: Word) -> Self {
        Self::new(offset, AddressingMode::Relative)
    }
}

/// Decoded instruction. Parameters are kept raw; resolving them against
/// memory is the executor's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    opcode: Opcode,
    params: [Parameter; MAX_ARITY],
}

impl Instruction {
    /// Build an instruction from an opcode and its parameters.
    ///
    /// Parameters beyond the opcode's arity are ignored; missing ones are
    /// position-mode zero.
    pub fn new(opcode: Opcode, params: &[Parameter]) -> Self {
        let mut slots = [Parameter::default(); MAX_ARITY];
        for (slot, param) in slots.iter_mut().zip(params.iter().take(opcode.arity())) {
            *slot = *param;
        }
        Self {
            opcode,
            params: slots,
        }
    }

    #[inline]
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Parameters in order, exactly `arity` of them
    #[inline]
    pub fn params(&self) -> &[Parameter] {
        &self.params[..self.opcode.arity()]
    }

    /// Number of words the instruction occupies in memory
    #[inline]
    pub fn width(&self) -> Word {
        1 + self.opcode.arity() as Word
    }

    /// The parameter this instruction writes through, if any
    pub fn store_target(&self) -> Option<Parameter> {
        self.opcode.store_param().map(|index| self.params[index])
    }

    /// Encode back into memory words: the opcode word followed by raw parameters
    pub fn encode(&self) -> Vec<Word> {
        let mut head = self.opcode.code();
        let mut place = OPCODE_DIVISOR;
        for param in self.params() {
            head += param.mode.digit() * place;
            place *= MODE_RADIX;
        }

        let mut words = Vec::with_capacity(self.params().len() + 1);
        words.push(head);
        words.extend(self.params().iter().map(|p| p.value));
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_limited_to_arity() {
        let instr = Instruction::new(
            Opcode::Output,
            &[Parameter::immediate(7), Parameter::position(3)],
        );
        assert_eq!(instr.params(), &[Parameter::immediate(7)]);
        assert_eq!(instr.width(), 2);
    }

    #[test]
    fn test_missing_params_default_to_position_zero() {
        let instr = Instruction::new(Opcode::Add, &[Parameter::immediate(1)]);
        assert_eq!(instr.params()[1], Parameter::position(0));
        assert_eq!(instr.params()[2], Parameter::position(0));
    }

    #[test]
    fn test_encode_mul_example() {
        let instr = Instruction::new(
            Opcode::Mul,
            &[
                Parameter::position(4),
                Parameter::immediate(3),
                Parameter::position(4),
            ],
        );
        assert_eq!(instr.encode(), vec![1002, 4, 3, 4]);
    }

    #[test]
    fn test_encode_relative_output() {
        let instr = Instruction::new(Opcode::Output, &[Parameter::relative(-1)]);
        assert_eq!(instr.encode(), vec![204, -1]);
    }

    #[test]
    fn test_encode_halt() {
        assert_eq!(Instruction::new(Opcode::Halt, &[]).encode(), vec![99]);
    }

    #[test]
    fn test_store_target() {
        let instr = Instruction::new(
            Opcode::Equals,
            &[
                Parameter::position(9),
                Parameter::position(10),
                Parameter::relative(9),
            ],
        );
        assert_eq!(instr.store_target(), Some(Parameter::relative(9)));

        let jump = Instruction::new(
            Opcode::JumpIfTrue,
            &[Parameter::immediate(1), Parameter::immediate(0)],
        );
        assert_eq!(jump.store_target(), None);
    }
}
