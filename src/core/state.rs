//! Run state machine

use crate::core::failure::FailureKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One of the ordered operations of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Find the customer in the directory
    Lookup,
    /// Decide whether the customer is a business customer
    Classify,
    /// Pick the home or work address
    ResolveAddress,
    /// Build the letter
    Compose,
    /// Dispatch the letter
    Send,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Stage; 5] = [
        Stage::Lookup,
        Stage::Classify,
        Stage::ResolveAddress,
        Stage::Compose,
        Stage::Send,
    ];

    /// State reached when this stage succeeds
    pub fn completes_into(&self) -> RunState {
        match self {
            Stage::Lookup => RunState::CustomerResolved,
            Stage::Classify => RunState::Classified,
            Stage::ResolveAddress => RunState::AddressResolved,
            Stage::Compose => RunState::LetterComposed,
            Stage::Send => RunState::Sent,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Lookup => "lookup",
            Stage::Classify => "classify",
            Stage::ResolveAddress => "resolve_address",
            Stage::Compose => "compose",
            Stage::Send => "send",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a run is in the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RunState {
    Start,
    CustomerResolved,
    Classified,
    AddressResolved,
    LetterComposed,
    /// Letter sent (terminal success)
    Sent,
    /// A stage failed (terminal)
    Failed { kind: FailureKind },
}

impl RunState {
    /// Check if the run can make no further progress
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Sent | RunState::Failed { .. })
    }

    /// The stage that moves the run out of this state, if any
    pub fn pending_stage(&self) -> Option<Stage> {
        match self {
            RunState::Start => Some(Stage::Lookup),
            RunState::CustomerResolved => Some(Stage::Classify),
            RunState::Classified => Some(Stage::ResolveAddress),
            RunState::AddressResolved => Some(Stage::Compose),
            RunState::LetterComposed => Some(Stage::Send),
            RunState::Sent | RunState::Failed { .. } => None,
        }
    }
}

/// Overall run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// Run has not started
    Pending,
    /// Stages are executing
    Running,
    /// Letter was sent
    Completed,
    /// A stage reported one of the recoverable failures
    Failed,
    /// A stage hit an internal fault
    Faulted,
}

/// Progress of a single run through the state machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunProgress {
    /// Unique run ID
    pub run_id: Uuid,

    /// Current status
    pub status: ExecutionStatus,

    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// When the run reached a terminal status
    pub completed_at: Option<DateTime<Utc>>,

    /// Every state visited, starting with `Start`
    pub path: Vec<RunState>,
}

impl RunProgress {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            status: ExecutionStatus::Pending,
            started_at: None,
            completed_at: None,
            path: vec![RunState::Start],
        }
    }

    /// Mark the run as started
    pub fn start(&mut self) {
        self.status = ExecutionStatus::Running;
        self.started_at = Some(Utc::now());
    }

    /// The latest state reached
    pub fn current(&self) -> RunState {
        self.path.last().copied().unwrap_or(RunState::Start)
    }

    /// Record a successful stage and return the new state
    pub fn complete_stage(&mut self, stage: Stage) -> RunState {
        debug_assert_eq!(
            self.current().pending_stage(),
            Some(stage),
            "stage {} completed out of order",
            stage
        );

        let next = stage.completes_into();
        self.path.push(next);
        if next == RunState::Sent {
            self.status = ExecutionStatus::Completed;
            self.completed_at = Some(Utc::now());
        }
        next
    }

    /// Record a failed stage and return the terminal state
    pub fn fail(&mut self, kind: FailureKind) -> RunState {
        let failed = RunState::Failed { kind };
        self.path.push(failed);
        self.status = ExecutionStatus::Failed;
        self.completed_at = Some(Utc::now());
        failed
    }

    /// Record an internal fault; the path stays at the last good state
    pub fn fault(&mut self) {
        self.status = ExecutionStatus::Faulted;
        self.completed_at = Some(Utc::now());
    }

    /// Number of stages that succeeded
    pub fn stages_completed(&self) -> usize {
        self.path
            .iter()
            .filter(|s| !matches!(s, RunState::Start | RunState::Failed { .. }))
            .count()
    }
}

impl Default for RunProgress {
    fn default() -> Self {
        Self::new()
    }
}
