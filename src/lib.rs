//! letter-pipeline - a four-stage letter workflow with three failure-propagation disciplines

pub mod boundary;
pub mod cli;
pub mod core;
pub mod execution;
pub mod stages;

// Re-export commonly used types
pub use boundary::{handle, Response};
pub use crate::core::config::PipelineConfig;
pub use crate::core::{
    Address, Customer, Discipline, FailureKind, Letter, LetterRequest, Outcome, PipelineFailure,
    RunError, RunState, SendResult, Stage,
};
pub use execution::{Comparison, LetterPipeline, PipelineEvent, RunReport};
pub use stages::Stages;
