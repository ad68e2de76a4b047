//! # Intcode Core Types
//!
//! Core types shared by the decoder, the runtime and the tooling.
//!
//! ## Key Features
//! - 64-bit signed words (`i64`), wide enough for 16-digit literals
//! - Ten opcodes identified by the last two decimal digits of an instruction word
//! - Three addressing modes: position, immediate and relative-to-base
//! - Comma-separated program text format
//!
//! ## Example
//!
//! ```rust
//! use intcode_spec::{Program, Opcode};
//!
//! let program = Program::load("1002,4,3,4,33").unwrap();
//! assert_eq!(program.len(), 5);
//! assert_eq!(Opcode::from_code(2), Some(Opcode::Mul));
//! ```

pub mod error;
pub mod opcode;
pub mod mode;
pub mod instruction;
pub mod program;
pub mod source;

pub use error::{SpecError, Result};
pub use opcode::Opcode;
pub use mode::AddressingMode;
pub use instruction::{Instruction, Parameter, MAX_ARITY};
pub use program::{load, Program};
pub use source::WordSource;

/// Machine word. Every memory cell, operand and I/O value is one word.
pub type Word = i64;

/// Opcode digits occupy the lowest two decimal places of an instruction word
pub const OPCODE_DIVISOR: Word = 100;

/// Each addressing mode occupies one decimal digit above the opcode
pub const MODE_RADIX: Word = 10;
