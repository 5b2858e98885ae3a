//! CLI command definitions

use crate::core::{CustomerId, Discipline};
use clap::Args;

/// Send one letter
#[derive(Debug, Args, Clone)]
pub struct SendCommand {
    /// Customer to send the letter to
    #[arg(long, allow_negative_numbers = true)]
    pub customer_id: CustomerId,

    /// Letter body
    #[arg(short, long, default_value = "Brief inhoud")]
    pub body: String,

    /// Propagation discipline (overrides the configuration)
    #[arg(long, value_enum)]
    pub discipline: Option<DisciplineArg>,

    /// Output the run report in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Send the same letter under every discipline
#[derive(Debug, Args, Clone)]
pub struct CompareCommand {
    /// Customer to send the letter to
    #[arg(long, allow_negative_numbers = true)]
    pub customer_id: CustomerId,

    /// Letter body
    #[arg(short, long, default_value = "Brief inhoud")]
    pub body: String,

    /// Output the comparison in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Validate a pipeline configuration
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to pipeline YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Discipline argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DisciplineArg {
    EagerUnwrap,
    ImplicitUnwind,
    ExplicitOutcome,
}

impl From<DisciplineArg> for Discipline {
    fn from(arg: DisciplineArg) -> Self {
        match arg {
            DisciplineArg::EagerUnwrap => Discipline::EagerUnwrap,
            DisciplineArg::ImplicitUnwind => Discipline::ImplicitUnwind,
            DisciplineArg::ExplicitOutcome => Discipline::ExplicitOutcome,
        }
    }
}
