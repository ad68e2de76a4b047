//! # Intcode Opcode Definitions
//!
//! Opcodes are the last two decimal digits of an instruction word. Every
//! opcode declares a fixed number of parameters that follow it in memory.
//!
//! | Code | Opcode | Arity | Effect |
//! |------|--------|-------|--------|
//! | 1  | ADD    | 3 | `mem[c] = a + b` |
//! | 2  | MUL    | 3 | `mem[c] = a * b` |
//! | 3  | IN     | 1 | `mem[a] = input` |
//! | 4  | OUT    | 1 | `output a` |
//! | 5  | JT     | 2 | `if a != 0 { ip = b }` |
//! | 6  | JF     | 2 | `if a == 0 { ip = b }` |
//! | 7  | LT     | 3 | `mem[c] = (a < b) as i64` |
//! | 8  | EQ     | 3 | `mem[c] = (a == b) as i64` |
//! | 9  | ARB    | 1 | `rb += a` |
//! | 99 | HALT   | 0 | stop |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Word;

/// Instruction opcode
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// ADD: mem[c] = read(a) + read(b)
    Add = 1,
    /// MUL: mem[c] = read(a) * read(b)
    Mul = 2,
    /// INPUT: mem[a] = next input, suspends when the queue is empty
    Input = 3,
    /// OUTPUT: append read(a) to the output queue
    Output = 4,
    /// JUMP-IF-TRUE: ip = read(b) if read(a) != 0
    JumpIfTrue = 5,
    /// JUMP-IF-FALSE: ip = read(b) if read(a) == 0
    JumpIfFalse = 6,
    /// LESS-THAN: mem[c] = 1 if read(a) < read(b) else 0
    LessThan = 7,
    /// EQUALS: mem[c] = 1 if read(a) == read(b) else 0
    Equals = 8,
    /// ADJUST-RELATIVE-BASE: rb += read(a)
    AdjustRelativeBase = 9,
    /// HALT: stop execution permanently
    Halt = 99,
}

impl Opcode {
    /// Every opcode, in code order
    pub const ALL: [Opcode; 10] = [
        Opcode::Add,
        Opcode::Mul,
        Opcode::Input,
        Opcode::Output,
        Opcode::JumpIfTrue,
        Opcode::JumpIfFalse,
        Opcode::LessThan,
        Opcode::Equals,
        Opcode::AdjustRelativeBase,
        Opcode::Halt,
    ];

    /// Try to convert from the two opcode digits of an instruction word
    pub fn from_code(code: Word) -> Option<Self> {
        match code {
            1 => Some(Opcode::Add),
            2 => Some(Opcode::Mul),
            3 => Some(Opcode::Input),
            4 => Some(Opcode::Output),
            5 => Some(Opcode::JumpIfTrue),
            6 => Some(Opcode::JumpIfFalse),
            7 => Some(Opcode::LessThan),
            8 => Some(Opcode::Equals),
            9 => Some(Opcode::AdjustRelativeBase),
            99 => Some(Opcode::Halt),
            _ => None,
        }
    }

    /// Numeric opcode value
    #[inline]
    pub fn code(self) -> Word {
        self as u8 as Word
    }

    /// Number of parameters following the opcode word
    pub fn arity(self) -> usize {
        match self {
            Opcode::Add | Opcode::Mul | Opcode::LessThan | Opcode::Equals => 3,
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => 2,
            Opcode::Input | Opcode::Output | Opcode::AdjustRelativeBase => 1,
            Opcode::Halt => 0,
        }
    }

    /// Index of the parameter used as a store target, if the opcode writes memory
    pub fn store_param(self) -> Option<usize> {
        match self {
            Opcode::Add | Opcode::Mul | Opcode::LessThan | Opcode::Equals => Some(2),
            Opcode::Input => Some(0),
            _ => None,
        }
    }

    /// Get instruction mnemonic
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Mul => "mul",
            Opcode::Input => "in",
            Opcode::Output => "out",
            Opcode::JumpIfTrue => "jt",
            Opcode::JumpIfFalse => "jf",
            Opcode::LessThan => "lt",
            Opcode::Equals => "eq",
            Opcode::AdjustRelativeBase => "arb",
            Opcode::Halt => "halt",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrips_table() {
        for opcode in Opcode::ALL {
            assert_eq!(Opcode::from_code(opcode.code()), Some(opcode));
        }
    }

    #[test]
    fn test_unknown_codes() {
        for code in [0, 10, 42, 98, 100, -1] {
            assert_eq!(Opcode::from_code(code), None, "code {}", code);
        }
    }

    #[test]
    fn test_arity_table() {
        assert_eq!(Opcode::Add.arity(), 3);
        assert_eq!(Opcode::Mul.arity(), 3);
        assert_eq!(Opcode::Input.arity(), 1);
        assert_eq!(Opcode::Output.arity(), 1);
        assert_eq!(Opcode::JumpIfTrue.arity(), 2);
        assert_eq!(Opcode::JumpIfFalse.arity(), 2);
        assert_eq!(Opcode::LessThan.arity(), 3);
        assert_eq!(Opcode::Equals.arity(), 3);
        assert_eq!(Opcode::AdjustRelativeBase.arity(), 1);
        assert_eq!(Opcode::Halt.arity(), 0);
    }

    #[test]
    fn test_store_param_within_arity() {
        for opcode in Opcode::ALL {
            if let Some(index) = opcode.store_param() {
                assert!(index < opcode.arity());
            }
        }
        assert_eq!(Opcode::Output.store_param(), None);
        assert_eq!(Opcode::Halt.store_param(), None);
    }

    #[test]
    fn test_mnemonics_unique() {
        let mut seen = std::collections::HashSet::new();
        for opcode in Opcode::ALL {
            assert!(seen.insert(opcode.mnemonic()));
        }
        assert_eq!(Opcode::AdjustRelativeBase.to_string(), "arb");
    }
}
