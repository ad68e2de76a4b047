//! # Error Types for Intcode

use thiserror::Error;

/// Errors raised while turning program text into a [`crate::Program`].
///
/// Decoding failures belong to the disassembler, which knows the pointer
/// they happened at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Invalid program text at token {index}: {token:?}")]
    InvalidProgramText { index: usize, token: String },
}

pub type Result<T> = std::result::Result<T, SpecError>;
