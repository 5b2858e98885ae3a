//! Failure-propagation disciplines

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a stage failure travels to the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Discipline {
    /// Every stage result is checked on the spot; failures are stage-specific
    /// error types declared in every signature
    EagerUnwrap,

    /// Failures unwind out of combinator chains and are recognised at the
    /// boundary; signatures do not mention them
    ImplicitUnwind,

    /// Every stage returns a `Result` and the chain short-circuits on the
    /// first `Err`
    ExplicitOutcome,
}

impl Discipline {
    pub const ALL: [Discipline; 3] = [
        Discipline::EagerUnwrap,
        Discipline::ImplicitUnwind,
        Discipline::ExplicitOutcome,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Discipline::EagerUnwrap => "eager-unwrap",
            Discipline::ImplicitUnwind => "implicit-unwind",
            Discipline::ExplicitOutcome => "explicit-outcome",
        }
    }
}

impl Default for Discipline {
    fn default() -> Self {
        Discipline::ExplicitOutcome
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
