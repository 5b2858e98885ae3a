//! Adapter boundary - turns run outcomes into responses
//!
//! Transport (HTTP, CLI) is left to the caller; this module only fixes the
//! status code and body each outcome maps to.

use crate::{
    core::{LetterRequest, Outcome, RunError},
    execution::LetterPipeline,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Body sent for internal faults; the diagnostic stays in the logs
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Status code and body handed back to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Map a run outcome to a response
    ///
    /// - sent: 200 with the send status
    /// - recognised failure: 400 with the failure message
    /// - internal fault: 500 with a generic body
    pub fn from_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Ok(sent) => Response::new(STATUS_OK, sent.status.clone()),
            Err(RunError::Failure(failure)) => {
                Response::new(STATUS_BAD_REQUEST, failure.message.clone())
            }
            Err(RunError::Fault(_)) => Response::new(STATUS_INTERNAL_ERROR, INTERNAL_ERROR_BODY),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.body)
    }
}

/// Run one request through the pipeline and answer it
pub fn handle(pipeline: &LetterPipeline, request: &LetterRequest) -> Response {
    Response::from_outcome(&pipeline.execute(request).outcome)
}
