//! Command-line interface

pub mod commands;
pub mod output;

use crate::{boundary::Response, execution::Comparison};
use clap::{Parser, Subcommand};
use commands::{CompareCommand, SendCommand, ValidateCommand};
use std::ffi::OsString;

/// Send letters through a stand-in workflow under a chosen failure-propagation discipline
#[derive(Debug, Parser, Clone)]
#[command(name = "letter-pipeline")]
#[command(version = "0.1.0")]
#[command(about = "Send letters and compare failure-propagation disciplines", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to pipeline configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Send one letter
    Send(SendCommand),

    /// Send the same letter under every discipline
    Compare(CompareCommand),

    /// Validate a pipeline configuration
    Validate(ValidateCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

/// Exit code for `send`: non-zero unless the letter went out
pub fn send_exit_code(response: &Response) -> i32 {
    if response.is_success() {
        0
    } else {
        1
    }
}

/// Exit code for `compare`: non-zero when the disciplines disagree
pub fn compare_exit_code(comparison: &Comparison) -> i32 {
    if comparison.agree() {
        0
    } else {
        1
    }
}
