//! Core domain models for the letter pipeline
//!
//! This module defines the records that flow through a run, the failure
//! taxonomy, the run state machine and the configuration.

pub mod config;
pub mod discipline;
pub mod failure;
pub mod model;
pub mod state;

pub use discipline::*;
pub use failure::*;
pub use model::*;
pub use state::*;
