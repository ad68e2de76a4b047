//! # Intcode Disassembler
//!
//! Decode Intcode instruction words and render programs as readable text.
//!
//! The [`decode`] function is the machine's decoder: the runtime calls it on
//! every step. [`format`] and [`disassemble`] are tooling built on top.
//!
//! ## Example
//!
//! ```rust
//! use intcode_spec::{Opcode, Program};
//! use intcode_disassembler::{decode, disassemble, format};
//!
//! let program = Program::load("1002,4,3,4,33").unwrap();
//! let instr = decode(&program, 0).unwrap();
//!
//! assert_eq!(instr.opcode(), Opcode::Mul);
//! assert_eq!(format(&instr), "mul [4], 3, [4]");
//! println!("{}", disassemble(&program));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::disassemble;
pub use decoder::decode;
pub use formatter::{format, format_param};
