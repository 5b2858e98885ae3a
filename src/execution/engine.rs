//! Main execution engine - orchestrates a whole letter run

use crate::{
    core::{
        config::PipelineConfig, CustomerId, Discipline, ExecutionStatus, LetterRequest, Outcome,
        PipelineFailure, RunError, RunProgress, RunState, SendResult, Stage,
    },
    execution::{eager, executor::StageRun, outcome, unwind},
    stages::Stages,
};
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Events that can occur during a run
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    RunStarted {
        run_id: Uuid,
        discipline: Discipline,
        customer_id: CustomerId,
    },
    StageCompleted {
        run_id: Uuid,
        stage: Stage,
        state: RunState,
    },
    StageFailed {
        run_id: Uuid,
        stage: Stage,
        failure: PipelineFailure,
    },
    RunFinished {
        run_id: Uuid,
        status: ExecutionStatus,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(PipelineEvent) + Send + Sync>;

/// Everything known about a finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub discipline: Discipline,
    pub request: LetterRequest,
    pub progress: RunProgress,
    pub outcome: Outcome,
}

impl RunReport {
    pub fn run_id(&self) -> Uuid {
        self.progress.run_id
    }

    pub fn final_state(&self) -> RunState {
        self.progress.current()
    }
}

/// Orchestrates the stages under one propagation discipline
///
/// The pipeline holds no per-run state, so one instance can serve any number
/// of runs, including from several threads at once.
#[derive(Clone)]
pub struct LetterPipeline {
    stages: Stages,
    discipline: Discipline,
    event_handlers: Vec<EventHandler>,
}

impl LetterPipeline {
    pub fn new(stages: Stages, discipline: Discipline) -> Self {
        Self {
            stages,
            discipline,
            event_handlers: Vec::new(),
        }
    }

    /// Pipeline with stand-in stages described by the configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(Stages::stand_in(config), config.discipline)
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Same stages and handlers under another discipline
    pub fn with_discipline(&self, discipline: Discipline) -> Self {
        Self {
            discipline,
            ..self.clone()
        }
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(PipelineEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Arc::new(handler));
    }

    /// Send one letter and return only the outcome
    pub fn send_letter(&self, customer_id: CustomerId, body: &str) -> Outcome {
        self.execute(&LetterRequest::new(customer_id, body)).outcome
    }

    /// Execute one run
    pub fn execute(&self, request: &LetterRequest) -> RunReport {
        let mut run = StageRun::new(&self.stages, &self.event_handlers);
        let run_id = run.run_id();

        info!(
            "Starting letter run {} for customer {} ({})",
            run_id, request.customer_id, self.discipline
        );
        run.emit(PipelineEvent::RunStarted {
            run_id,
            discipline: self.discipline,
            customer_id: request.customer_id,
        });
        run.start();

        let outcome = match self.dispatch(&mut run, request) {
            Ok(sent) => Ok(sent),
            Err(RunError::Failure(failure)) => {
                run.failed(&failure);
                Err(RunError::Failure(failure))
            }
            Err(RunError::Fault(diagnostic)) => {
                error!("Letter run {} hit an internal fault: {}", run_id, diagnostic);
                run.faulted();
                Err(RunError::Fault(diagnostic))
            }
        };

        let progress = run.into_progress();
        info!("Letter run {} finished: {:?}", run_id, progress.status);
        for handler in &self.event_handlers {
            handler(PipelineEvent::RunFinished {
                run_id,
                status: progress.status,
            });
        }

        RunReport {
            discipline: self.discipline,
            request: request.clone(),
            progress,
            outcome,
        }
    }

    /// Run the selected discipline and bring its failure encoding back to
    /// [`RunError`]. Any unwind that is not a recognised failure signal is a
    /// fault, whichever discipline was running.
    fn dispatch(&self, run: &mut StageRun<'_>, request: &LetterRequest) -> Outcome {
        let customer_id = request.customer_id;
        let body = request.body.as_str();

        let caught = panic::catch_unwind(AssertUnwindSafe(
            || -> Result<SendResult, PipelineFailure> {
                match self.discipline {
                    Discipline::EagerUnwrap => {
                        eager::send_letter(run, customer_id, body).map_err(PipelineFailure::from)
                    }
                    Discipline::ImplicitUnwind => Ok(unwind::send_letter(run, customer_id, body)),
                    Discipline::ExplicitOutcome => outcome::send_letter(run, customer_id, body),
                }
            },
        ));

        match caught {
            Ok(result) => result.map_err(RunError::Failure),
            Err(payload) => match unwind::recover(payload) {
                Ok(failure) => Err(RunError::Failure(failure)),
                Err(diagnostic) => Err(RunError::Fault(diagnostic)),
            },
        }
    }
}

impl std::fmt::Debug for LetterPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LetterPipeline")
            .field("discipline", &self.discipline)
            .field("event_handlers", &self.event_handlers.len())
            .finish()
    }
}
