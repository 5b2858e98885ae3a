//! Test: every discipline answers every request identically

use crate::helpers::*;
use letter_pipeline::core::config::PipelineConfig;
use letter_pipeline::stages::{ComposeError, SendError};
use letter_pipeline::{Discipline, LetterPipeline, LetterRequest, Stages};
use std::sync::Arc;

fn stage_setups() -> Vec<(&'static str, Stages)> {
    let no_work = PipelineConfig {
        work_address: None,
        ..PipelineConfig::default()
    };

    vec![
        ("stand-in", Stages::default()),
        ("no work address", Stages::stand_in(&no_work)),
        ("private only", Stages::default().with_classifier(Arc::new(PrivateOnly))),
        (
            "rejecting composer",
            Stages::default().with_composer(Arc::new(RejectingComposer(ComposeError::Rejected))),
        ),
        (
            "broken sender",
            Stages::default().with_sender(Arc::new(BrokenSender(SendError::Unavailable))),
        ),
        (
            "panicking sender",
            Stages::default().with_sender(Arc::new(PanickingSender)),
        ),
    ]
}

/// Responses are byte-identical across disciplines
#[test]
fn test_disciplines_are_indistinguishable() {
    for (name, stages) in stage_setups() {
        for customer_id in [0, 1, 5] {
            let request = LetterRequest::new(customer_id, BODY);
            let rendered: Vec<String> = Discipline::ALL
                .iter()
                .map(|discipline| {
                    let response = respond(&stages, *discipline, &request);
                    serde_json::to_string(&response).unwrap()
                })
                .collect();

            assert!(
                rendered.windows(2).all(|pair| pair[0] == pair[1]),
                "{} / customer {}: {:?}",
                name,
                customer_id,
                rendered
            );
        }
    }
}

#[test]
fn test_compare_agrees() {
    for (name, stages) in stage_setups() {
        let pipeline = LetterPipeline::new(stages, Discipline::default());
        for customer_id in [0, 5] {
            let comparison = pipeline.compare(&LetterRequest::new(customer_id, BODY));
            assert!(comparison.agree(), "{} / customer {}", name, customer_id);
            assert_eq!(comparison.reports.len(), Discipline::ALL.len());
        }
    }
}

/// Runs share no state, so concurrent runs see their own outcome
#[test]
fn test_concurrent_runs() {
    let pipeline = LetterPipeline::from_config(&PipelineConfig::default());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let pipeline = pipeline.with_discipline(Discipline::ALL[i % Discipline::ALL.len()]);
                scope.spawn(move || {
                    let customer_id = (i % 2) as i32;
                    (customer_id, letter_pipeline::handle(&pipeline, &LetterRequest::new(customer_id, BODY)))
                })
            })
            .collect();

        for handle in handles {
            let (customer_id, response) = handle.join().unwrap();
            if customer_id == 0 {
                assert_eq!(response.status, 400);
                assert_eq!(response.body, "Klant niet gevonden");
            } else {
                assert_eq!(response.status, 200);
                assert_eq!(response.body, "ok");
            }
        }
    });
}
