//! Test: compose and send failures, and faults that are not failures at all

use crate::helpers::*;
use letter_pipeline::core::ExecutionStatus;
use letter_pipeline::stages::{ComposeError, SendError};
use letter_pipeline::{
    Discipline, FailureKind, LetterPipeline, LetterRequest, Response, RunError, RunState, Stages,
};
use std::sync::Arc;

#[test]
fn test_rejected_letter_answers_400() {
    let stages = Stages::default().with_composer(Arc::new(RejectingComposer(
        ComposeError::InvalidBody("lege brief".to_string()),
    )));

    for discipline in Discipline::ALL {
        let response = respond(&stages, discipline, &LetterRequest::new(5, ""));
        assert_eq!(response.status, 400, "discipline {}", discipline);
        assert_eq!(
            response.body,
            "Brief kon niet worden samengesteld: lege brief",
            "discipline {}",
            discipline
        );
    }
}

#[test]
fn test_rejected_letter_is_never_sent() {
    for discipline in Discipline::ALL {
        let (stages, counts) = recording(
            Stages::default().with_composer(Arc::new(RejectingComposer(ComposeError::Rejected))),
        );
        let pipeline = LetterPipeline::new(stages, discipline);
        let report = pipeline.execute(&LetterRequest::new(5, BODY));

        assert_eq!(
            report.final_state(),
            RunState::Failed {
                kind: FailureKind::ComposeFailed
            }
        );
        assert_eq!(counts.compose(), 1);
        assert_eq!(counts.send(), 0);
    }
}

#[test]
fn test_failed_dispatch_answers_400() {
    let stages = Stages::default().with_sender(Arc::new(BrokenSender(SendError::Dispatch(
        "postbus vol".to_string(),
    ))));

    for discipline in Discipline::ALL {
        let response = respond(&stages, discipline, &LetterRequest::new(5, BODY));
        assert_eq!(response.status, 400, "discipline {}", discipline);
        assert_eq!(
            response.body,
            "Brief kon niet worden verstuurd: postbus vol",
            "discipline {}",
            discipline
        );
    }
}

#[test]
fn test_failed_dispatch_path() {
    for discipline in Discipline::ALL {
        let stages =
            Stages::default().with_sender(Arc::new(BrokenSender(SendError::Unavailable)));
        let report = LetterPipeline::new(stages, discipline).execute(&LetterRequest::new(5, BODY));

        assert_eq!(
            report.outcome.as_ref().map_err(|e| e.failure().map(|f| f.kind)),
            Err(Some(FailureKind::SendFailed))
        );
        assert_eq!(
            report.progress.path.last(),
            Some(&RunState::Failed {
                kind: FailureKind::SendFailed
            })
        );
        assert_eq!(report.progress.stages_completed(), 4);
    }
}

/// A defect in a stage is a 500, never a 400, and never leaks its message
#[test]
fn test_stage_defect_answers_500() {
    let stages = Stages::default().with_sender(Arc::new(PanickingSender));

    for discipline in Discipline::ALL {
        let response = respond(&stages, discipline, &LetterRequest::new(5, BODY));
        assert_eq!(response.status, 500, "discipline {}", discipline);
        assert_eq!(response.body, "Internal Server Error", "discipline {}", discipline);
    }
}

#[test]
fn test_stage_defect_is_a_fault() {
    for discipline in Discipline::ALL {
        let stages = Stages::default().with_sender(Arc::new(PanickingSender));
        let report = LetterPipeline::new(stages, discipline).execute(&LetterRequest::new(5, BODY));

        let error = report.outcome.as_ref().unwrap_err();
        assert!(error.is_fault(), "discipline {}", discipline);
        assert!(matches!(error, RunError::Fault(message) if message.contains("no zip code known")));

        assert_eq!(report.progress.status, ExecutionStatus::Faulted);
        assert_eq!(report.final_state(), RunState::LetterComposed);
    }
}

/// The JSON document printed by `send --json` carries no diagnostic
#[test]
fn test_fault_diagnostic_stays_out_of_json_output() {
    for discipline in Discipline::ALL {
        let pipeline =
            LetterPipeline::new(Stages::default().with_sender(Arc::new(PanickingSender)), discipline);
        let report = pipeline.execute(&LetterRequest::new(5, BODY));
        let response = Response::from_outcome(&report.outcome);

        let rendered = serde_json::to_string(&serde_json::json!({
            "report": report,
            "response": response,
        }))
        .unwrap();

        assert!(rendered.contains("Internal Server Error"));
        assert!(!rendered.contains("no zip code known"), "discipline {}", discipline);
    }
}

#[test]
fn test_comparison_json_carries_no_diagnostic() {
    let pipeline = LetterPipeline::new(
        Stages::default().with_sender(Arc::new(PanickingSender)),
        Discipline::default(),
    );
    let comparison = pipeline.compare(&LetterRequest::new(5, BODY));

    let rendered = serde_json::to_string(&comparison).unwrap();
    assert!(!rendered.contains("no zip code known"));
}

/// A fault in one run leaves the pipeline usable for the next
#[test]
fn test_pipeline_survives_fault() {
    let pipeline = LetterPipeline::new(
        Stages::default().with_sender(Arc::new(PanickingSender)),
        Discipline::ImplicitUnwind,
    );

    assert_eq!(letter_pipeline::handle(&pipeline, &LetterRequest::new(5, BODY)).status, 500);
    assert_eq!(letter_pipeline::handle(&pipeline, &LetterRequest::new(0, BODY)).status, 400);
}
