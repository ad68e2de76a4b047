//! Machine state for Intcode

use serde::{Deserialize, Serialize};

use intcode_spec::Word;

/// Machine status
///
/// `Running → BlockedOnInput → Running → ... → Halted`. Halted is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Running,
    /// Next instruction is INPUT and the input queue is empty
    BlockedOnInput,
    /// HALT executed
    Halted,
}

impl Status {
    #[inline]
    pub fn is_halted(self) -> bool {
        self == Status::Halted
    }

    #[inline]
    pub fn is_blocked(self) -> bool {
        self == Status::BlockedOnInput
    }
}

/// Registers of one machine. Memory and I/O queues live next to it in
/// [`crate::Machine`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineState {
    /// Instruction pointer
    pub ip: Word,

    /// Base for relative-mode parameters
    pub relative_base: Word,

    pub status: Status,

    /// Instructions executed so far. A blocked INPUT does not count.
    pub steps: u64,
}

impl MachineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn halt(&mut self) {
        self.status = Status::Halted;
    }

    pub fn block(&mut self) {
        self.status = Status::BlockedOnInput;
    }

    /// Leave BlockedOnInput so the pending INPUT is retried. No effect once halted.
    pub fn resume(&mut self) {
        if self.status == Status::BlockedOnInput {
            self.status = Status::Running;
        }
    }

    #[inline]
    pub fn inc_steps(&mut self) {
        self.steps += 1;
    }
}
