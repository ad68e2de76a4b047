//! Parameter addressing modes

use serde::{Deserialize, Serialize};

use crate::Word;

/// How a raw parameter word maps to an operand or a store target
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressingMode {
    /// Raw value is an address to dereference
    #[default]
    Position = 0,
    /// Raw value is the operand itself; never a valid store target
    Immediate = 1,
    /// Raw value is an offset from the relative base
    Relative = 2,
}

impl AddressingMode {
    /// Try to convert from a single mode digit
    pub fn from_digit(digit: Word) -> Option<Self> {
        match digit {
            0 => Some(AddressingMode::Position),
            1 => Some(AddressingMode::Immediate),
            2 => Some(AddressingMode::Relative),
            _ => None,
        }
    }

    #[inline]
    pub fn digit(self) -> Word {
        self as u8 as Word
    }

    /// Whether a parameter in this mode can name a memory cell to write
    #[inline]
    pub fn is_writable(self) -> bool {
        self != AddressingMode::Immediate
    }
}
