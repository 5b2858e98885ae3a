//! Side-by-side runs under every discipline

use crate::{
    boundary::Response,
    core::{Discipline, LetterRequest},
    execution::engine::{LetterPipeline, RunReport},
};
use serde::Serialize;
use tracing::warn;

/// Reports for one request, one per discipline
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub request: LetterRequest,
    pub reports: Vec<RunReport>,
}

impl Comparison {
    /// Boundary response of each run, in discipline order
    pub fn responses(&self) -> Vec<(Discipline, Response)> {
        self.reports
            .iter()
            .map(|report| (report.discipline, Response::from_outcome(&report.outcome)))
            .collect()
    }

    /// True when every discipline produced the same response
    pub fn agree(&self) -> bool {
        let responses = self.responses();
        responses
            .windows(2)
            .all(|pair| pair[0].1 == pair[1].1)
    }
}

impl LetterPipeline {
    /// Run the same request under every discipline
    pub fn compare(&self, request: &LetterRequest) -> Comparison {
        let reports: Vec<RunReport> = Discipline::ALL
            .iter()
            .map(|discipline| self.with_discipline(*discipline).execute(request))
            .collect();

        let comparison = Comparison {
            request: request.clone(),
            reports,
        };
        if !comparison.agree() {
            warn!(
                "Disciplines disagree for customer {}",
                request.customer_id
            );
        }
        comparison
    }
}
