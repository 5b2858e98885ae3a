//! Pipeline execution engine

pub mod compare;
pub mod eager;
pub mod engine;
pub mod executor;
pub mod outcome;
pub mod unwind;

pub use compare::Comparison;
pub use engine::{EventHandler, LetterPipeline, PipelineEvent, RunReport};
pub use executor::StageRun;
