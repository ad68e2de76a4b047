//! Virtual Machine for Intcode

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, trace, warn};

use intcode_disassembler::{decode, format};
use intcode_spec::{Instruction, Program, Word};

use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::io::IOHandler;
use crate::memory::Memory;
use crate::state::{MachineState, Status};

/// Machine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineConfig {
    /// Maximum number of instructions to execute over the machine's lifetime.
    ///
    /// `None` runs without bound; a program that never halts or reads input
    /// then runs forever.
    pub max_steps: Option<u64>,
}

impl MachineConfig {
    pub fn with_max_steps(max_steps: u64) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }
}

/// Snapshot handed to callers that want a summary rather than the machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionReport {
    pub status: Status,
    pub steps: u64,
    pub outputs: Vec<Word>,
}

/// Intcode Virtual Machine
///
/// One instance per loaded program or pipeline stage. The caller drives it
/// with [`Machine::run`], feeding input whenever it reports
/// [`Status::BlockedOnInput`] and draining output at any time.
#[derive(Debug, Clone)]
pub struct Machine {
    /// Registers and status
    state: MachineState,

    memory: Memory,

    io: IOHandler,

    config: MachineConfig,
}

impl Machine {
    /// Create a machine with the program loaded at address 0
    pub fn new(program: &Program) -> Self {
        Self::with_config(program, MachineConfig::default())
    }

    /// Parse program text and load it into a fresh machine
    pub fn load(text: &str) -> Result<Self> {
        let program = Program::load(text)?;
        Ok(Self::new(&program))
    }

    pub fn with_config(program: &Program, config: MachineConfig) -> Self {
        Self {
            state: MachineState::new(),
            memory: Memory::from_program(program),
            io: IOHandler::default(),
            config,
        }
    }

    /// Builder-style input seeding, e.g. a phase setting
    pub fn with_input<I: IntoIterator<Item = Word>>(mut self, values: I) -> Self {
        self.io.extend_inputs(values);
        self
    }

    /// Run until the machine blocks on input or halts.
    ///
    /// A blocked machine is resumed first; if no input arrived in between it
    /// blocks again on the same INPUT. Running a halted machine is a no-op.
    pub fn run(&mut self) -> Result<Status> {
        if self.state.status.is_halted() {
            return Ok(Status::Halted);
        }

        self.state.resume();
        while self.state.status == Status::Running {
            self.execute_next()?;
        }

        match self.state.status {
            Status::BlockedOnInput => debug!(
                ip = self.state.ip,
                steps = self.state.steps,
                outputs = self.io.outputs().len(),
                "blocked on input"
            ),
            Status::Halted => debug!(
                steps = self.state.steps,
                outputs = self.io.outputs().len(),
                "halted"
            ),
            Status::Running => {}
        }

        Ok(self.state.status)
    }

    /// Execute exactly one instruction
    pub fn step(&mut self) -> Result<Status> {
        if self.state.status.is_halted() {
            return Ok(Status::Halted);
        }

        self.state.resume();
        self.execute_next()?;
        Ok(self.state.status)
    }

    fn execute_next(&mut self) -> Result<()> {
        if let Some(limit) = self.config.max_steps {
            if self.state.steps >= limit {
                warn!(limit, ip = self.state.ip, "step limit exceeded");
                return Err(RuntimeError::StepLimitExceeded { limit });
            }
        }

        let instr = decode(&self.memory, self.state.ip)?;
        trace!(
            ip = self.state.ip,
            rb = self.state.relative_base,
            "{}",
            format(&instr)
        );

        execute(&instr, &mut self.state, &mut self.memory, &mut self.io)?;

        if !self.state.status.is_blocked() {
            self.state.inc_steps();
        }
        Ok(())
    }

    /// Decode the instruction at the instruction pointer without executing it
    pub fn current_instruction(&self) -> Result<Instruction> {
        Ok(decode(&self.memory, self.state.ip)?)
    }

    pub fn push_input(&mut self, value: Word) {
        self.io.push_input(value);
    }

    pub fn extend_input<I: IntoIterator<Item = Word>>(&mut self, values: I) {
        self.io.extend_inputs(values);
    }

    pub fn pending_inputs(&self) -> usize {
        self.io.pending_inputs()
    }

    /// Outputs not yet drained, oldest first
    pub fn outputs(&self) -> &VecDeque<Word> {
        self.io.outputs()
    }

    pub fn next_output(&mut self) -> Option<Word> {
        self.io.next_output()
    }

    pub fn take_outputs(&mut self) -> Vec<Word> {
        self.io.take_outputs()
    }

    pub fn last_output(&self) -> Option<Word> {
        self.io.last_output()
    }

    /// Summarise the machine and drain its outputs
    pub fn report(&mut self) -> ExecutionReport {
        ExecutionReport {
            status: self.state.status,
            steps: self.state.steps,
            outputs: self.io.take_outputs(),
        }
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn is_halted(&self) -> bool {
        self.state.status.is_halted()
    }

    pub fn is_blocked(&self) -> bool {
        self.state.status.is_blocked()
    }

    pub fn instruction_pointer(&self) -> Word {
        self.state.ip
    }

    pub fn relative_base(&self) -> Word {
        self.state.relative_base
    }

    pub fn steps(&self) -> u64 {
        self.state.steps
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Raise or clear the step budget, e.g. to continue after
    /// [`RuntimeError::StepLimitExceeded`]
    pub fn set_max_steps(&mut self, max_steps: Option<u64>) {
        self.config.max_steps = max_steps;
    }

    /// Get memory (for diagnostics; not part of the execution contract)
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Get state (for debugging)
    pub fn state(&self) -> &MachineState {
        &self.state
    }
}
