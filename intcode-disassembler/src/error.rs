//! Decoder errors

use intcode_spec::Word;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisassemblerError {
    #[error("Unknown opcode {} in word {word} at address {pointer}", word.rem_euclid(100))]
    UnknownOpcode { pointer: Word, word: Word },

    #[error("Unknown addressing mode {digit} in word {word} at address {pointer}")]
    UnknownAddressingMode { pointer: Word, word: Word, digit: Word },
}

impl DisassemblerError {
    /// Address of the instruction word that failed to decode
    pub fn pointer(&self) -> Word {
        match self {
            DisassemblerError::UnknownOpcode { pointer, .. }
            | DisassemblerError::UnknownAddressingMode { pointer, .. } => *pointer,
        }
    }
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
