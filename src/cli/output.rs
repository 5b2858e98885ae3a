//! CLI output formatting

use crate::{
    boundary::Response,
    core::{ExecutionStatus, RunState},
    execution::{Comparison, PipelineEvent},
};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "!");
pub static ENVELOPE: Emoji<'_, '_> = Emoji("✉️  ", "> ");

/// Format a run state for display
pub fn format_state(state: &RunState) -> String {
    match state {
        RunState::Start => style("START").dim().to_string(),
        RunState::CustomerResolved => style("CUSTOMER RESOLVED").cyan().to_string(),
        RunState::Classified => style("CLASSIFIED").cyan().to_string(),
        RunState::AddressResolved => style("ADDRESS RESOLVED").cyan().to_string(),
        RunState::LetterComposed => style("LETTER COMPOSED").cyan().to_string(),
        RunState::Sent => style("SENT").green().to_string(),
        RunState::Failed { kind } => style(format!("FAILED ({})", kind)).red().to_string(),
    }
}

/// Format an execution status for display
pub fn format_status(status: ExecutionStatus) -> String {
    match status {
        ExecutionStatus::Pending => style("PENDING").dim().to_string(),
        ExecutionStatus::Running => style("RUNNING").yellow().to_string(),
        ExecutionStatus::Completed => style("COMPLETED").green().to_string(),
        ExecutionStatus::Failed => style("FAILED").red().to_string(),
        ExecutionStatus::Faulted => style("FAULTED").red().bold().to_string(),
    }
}

/// Format a boundary response for display
pub fn format_response(response: &Response) -> String {
    let icon = if response.is_success() { CHECK } else { CROSS };
    let status = if response.is_success() {
        style(response.status).green()
    } else {
        style(response.status).red()
    };
    format!("{}{} {}", icon, status, style(&response.body).bold())
}

/// Format a pipeline event for display
pub fn format_event(event: &PipelineEvent) -> String {
    match event {
        PipelineEvent::RunStarted {
            run_id,
            discipline,
            customer_id,
        } => format!(
            "{}Letter run {} for customer {} ({})",
            ENVELOPE,
            style(&run_id.to_string()[..8]).dim(),
            style(customer_id).bold(),
            style(discipline).cyan()
        ),
        PipelineEvent::StageCompleted { stage, state, .. } => {
            format!("  {}{} → {}", CHECK, style(stage).green(), format_state(state))
        }
        PipelineEvent::StageFailed { stage, failure, .. } => format!(
            "  {}{}: {}",
            CROSS,
            style(stage).red(),
            style(&failure.message).dim()
        ),
        PipelineEvent::RunFinished { run_id, status } => format!(
            "{}Run ({}) {}",
            INFO,
            style(&run_id.to_string()[..8]).dim(),
            format_status(*status)
        ),
    }
}

/// Format a discipline comparison for display
pub fn format_comparison(comparison: &Comparison) -> String {
    let mut lines: Vec<String> = comparison
        .responses()
        .iter()
        .map(|(discipline, response)| {
            format!("  {:<18} {}", discipline.name(), format_response(response))
        })
        .collect();

    if comparison.agree() {
        lines.push(format!("{}All disciplines agree", CHECK));
    } else {
        lines.push(format!("{}Disciplines disagree", WARN));
    }
    lines.join("\n")
}
