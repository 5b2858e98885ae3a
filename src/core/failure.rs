//! Pipeline failure taxonomy

use crate::core::{model::SendResult, state::Stage};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Message reported when the directory has no such customer
pub const CUSTOMER_NOT_FOUND: &str = "Klant niet gevonden";

/// Message reported when a business customer has no work address
pub const ADDRESS_NOT_FOUND: &str = "Adres niet gevonden";

/// The four recoverable ways a run can fail, one per stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    CustomerNotFound,
    AddressNotFound,
    ComposeFailed,
    SendFailed,
}

impl FailureKind {
    /// The stage that raises this kind of failure
    pub fn stage(&self) -> Stage {
        match self {
            FailureKind::CustomerNotFound => Stage::Lookup,
            FailureKind::AddressNotFound => Stage::ResolveAddress,
            FailureKind::ComposeFailed => Stage::Compose,
            FailureKind::SendFailed => Stage::Send,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Terminal failure of a run
///
/// The message is reported to the caller verbatim, so it must never carry
/// internal diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct PipelineFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl PipelineFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn customer_not_found() -> Self {
        Self::new(FailureKind::CustomerNotFound, CUSTOMER_NOT_FOUND)
    }

    pub fn address_not_found() -> Self {
        Self::new(FailureKind::AddressNotFound, ADDRESS_NOT_FOUND)
    }

    pub fn compose_failed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::ComposeFailed, message)
    }

    pub fn send_failed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::SendFailed, message)
    }
}

/// Why a run did not produce a [`SendResult`]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum RunError {
    /// One of the four business-rule failures
    #[error(transparent)]
    Failure(#[from] PipelineFailure),

    /// A defect inside a stage (not a business-rule failure)
    ///
    /// The diagnostic is for the log only; it serialises as `null`.
    #[error("internal fault: {0}")]
    #[serde(
        serialize_with = "redact_diagnostic",
        deserialize_with = "redacted_diagnostic"
    )]
    Fault(String),
}

fn redact_diagnostic<S>(_diagnostic: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_none()
}

fn redacted_diagnostic<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RunError {
    /// The recognised failure, if this is one
    pub fn failure(&self) -> Option<&PipelineFailure> {
        match self {
            RunError::Failure(failure) => Some(failure),
            RunError::Fault(_) => None,
        }
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, RunError::Fault(_))
    }
}

/// What a single run hands back to the boundary
pub type Outcome = Result<SendResult, RunError>;
