//! Runtime error types for the Intcode machine

use intcode_disassembler::DisassemblerError;
use intcode_spec::{Opcode, SpecError, Word};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Program load error: {0}")]
    Spec(#[from] SpecError),

    #[error("Decode error: {0}")]
    Decode(#[from] DisassemblerError),

    #[error("Invalid store target: {opcode} at address {pointer} writes through an immediate parameter")]
    InvalidStoreTarget { pointer: Word, opcode: Opcode },

    #[error("Step limit exceeded: {limit}")]
    StepLimitExceeded { limit: u64 },

    #[error("Input exhausted at address {pointer}")]
    InputExhausted { pointer: Word },

    #[error("Pipeline stalled at stage {stage}")]
    PipelineStalled { stage: usize },

    #[error("Stage {stage} halted without producing output")]
    MissingOutput { stage: usize },

    #[error("Pipeline has no stages")]
    EmptyPipeline,
}

impl RuntimeError {
    /// True for errors caused by the program itself rather than by how it was driven
    pub fn is_program_defect(&self) -> bool {
        matches!(
            self,
            RuntimeError::Decode(_) | RuntimeError::InvalidStoreTarget { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
