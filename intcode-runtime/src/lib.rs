//! # Intcode Runtime
//!
//! Execute Intcode programs on a suspendable virtual machine.
//!
//! ## Features
//!
//! - **Sparse memory**: grows on demand, unwritten cells read as zero
//! - **Three addressing modes**: position, immediate and relative-to-base
//! - **Suspension**: INPUT on an empty queue yields to the caller, who can
//!   feed more input and resume
//! - **Composition**: chains, feedback rings and interactive controllers
//!
//! ## Example
//!
//! ```rust
//! use intcode_runtime::{Machine, Status};
//! use intcode_spec::Program;
//!
//! let program = Program::load("3,9,8,9,10,9,4,9,99,-1,8").unwrap();
//! let mut machine = Machine::new(&program);
//!
//! assert_eq!(machine.run().unwrap(), Status::BlockedOnInput);
//! machine.push_input(8);
//! assert_eq!(machine.run().unwrap(), Status::Halted);
//! assert_eq!(machine.take_outputs(), vec![1]);
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod io;
pub mod execute;
pub mod vm;
pub mod pipeline;
pub mod controller;
pub mod ascii;

pub use state::{MachineState, Status};
pub use memory::Memory;
pub use io::IOHandler;
pub use vm::{ExecutionReport, Machine, MachineConfig};
pub use error::RuntimeError;
pub use pipeline::{
    amplify, amplify_with_feedback, best_phase_setting, find_noun_verb, run_chain, FeedbackLoop,
};
pub use controller::{drive, Controller};

use intcode_spec::{Program, Word};

/// Simple execution helper
///
/// Runs a program with the given inputs until it halts and returns the
/// outputs. Fails with [`RuntimeError::InputExhausted`] if the program asks
/// for more input than was supplied.
pub fn run(program: &Program, inputs: Vec<Word>) -> Result<Vec<Word>, RuntimeError> {
    let mut machine = Machine::new(program).with_input(inputs);
    match machine.run()? {
        Status::Halted => Ok(machine.take_outputs()),
        _ => Err(RuntimeError::InputExhausted {
            pointer: machine.instruction_pointer(),
        }),
    }
}
