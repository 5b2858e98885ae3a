//! Test: business customer - the work-address path end to end

use crate::helpers::*;
use letter_pipeline::core::config::PipelineConfig;
use letter_pipeline::{
    Address, Customer, Discipline, Letter, LetterPipeline, LetterRequest, PipelineEvent,
    RunState, SendResult,
};
use letter_pipeline::stages::{CustomerDirectory, LetterComposer, LetterSender, SendError};
use std::sync::{Arc, Mutex};

/// Captures the letter handed to the sender
struct CapturingSender {
    letters: Mutex<Vec<Letter>>,
}

impl LetterSender for CapturingSender {
    fn send(&self, letter: &Letter) -> Result<SendResult, SendError> {
        self.letters.lock().unwrap().push(letter.clone());
        Ok(SendResult::new("ok"))
    }
}

/// Scenario B: id 5 answers 200 "ok"
#[test]
fn test_business_customer_answers_200() {
    let stages = letter_pipeline::Stages::default();
    let request = LetterRequest::new(5, BODY);

    for discipline in Discipline::ALL {
        let response = respond(&stages, discipline, &request);
        assert_eq!(response.status, 200, "discipline {}", discipline);
        assert_eq!(response.body, "ok", "discipline {}", discipline);
    }
}

/// Scenario B: the letter goes to Robbert at the work address
#[test]
fn test_letter_goes_to_work_address() {
    for discipline in Discipline::ALL {
        let sender = Arc::new(CapturingSender {
            letters: Mutex::new(Vec::new()),
        });
        let stages = letter_pipeline::Stages::default().with_sender(sender.clone());
        let pipeline = LetterPipeline::new(stages, discipline);

        let report = pipeline.execute(&LetterRequest::new(5, BODY));
        assert_eq!(report.outcome, Ok(SendResult::new("ok")));

        let letters = sender.letters.lock().unwrap();
        assert_eq!(
            *letters,
            vec![Letter {
                body: BODY.to_string(),
                address: Address::new("werkstraat", 2, "Rdam"),
                customer: Customer::new(5, "Robbert"),
            }]
        );
    }
}

/// Every state of the machine is visited in order
#[test]
fn test_success_visits_every_state() {
    for discipline in Discipline::ALL {
        let pipeline =
            LetterPipeline::from_config(&PipelineConfig::default().with_discipline(discipline));
        let report = pipeline.execute(&LetterRequest::new(5, BODY));

        assert_eq!(
            report.progress.path,
            vec![
                RunState::Start,
                RunState::CustomerResolved,
                RunState::Classified,
                RunState::AddressResolved,
                RunState::LetterComposed,
                RunState::Sent,
            ]
        );
    }
}

/// Robbert is a business customer, so only the work address is asked for
#[test]
fn test_business_customer_never_uses_home_address() {
    for discipline in Discipline::ALL {
        let (stages, counts) = recording_stand_ins(&PipelineConfig::default());
        respond(&stages, discipline, &LetterRequest::new(5, BODY));

        assert_eq!(counts.lookup(), 1);
        assert_eq!(counts.classify(), 1);
        assert_eq!(counts.work_address(), 1);
        assert_eq!(counts.home_address(), 0);
        assert_eq!(counts.compose(), 1);
        assert_eq!(counts.send(), 1);
    }
}

/// Any non-zero id resolves to Robbert with that id
#[test]
fn test_any_nonzero_id_is_robbert() {
    let stages = letter_pipeline::Stages::default();
    for id in [1, 2, 5, 1000, -1, i32::MIN, i32::MAX] {
        assert_eq!(stages.directory.find_customer(id), Some(Customer::new(id, "Robbert")));
    }
}

/// Idempotence: repeated runs give the same outcome and visit the same states
#[test]
fn test_repeated_runs_are_identical() {
    for discipline in Discipline::ALL {
        let pipeline =
            LetterPipeline::from_config(&PipelineConfig::default().with_discipline(discipline));

        for request in [LetterRequest::new(5, BODY), LetterRequest::new(0, BODY)] {
            let first = pipeline.execute(&request);
            let second = pipeline.execute(&request);

            assert_eq!(first.outcome, second.outcome);
            assert_eq!(first.progress.path, second.progress.path);
            assert_ne!(first.run_id(), second.run_id());
        }
    }
}

/// The composer sees exactly the body from the request
#[test]
fn test_body_passes_through_unchanged() {
    let body = "Beste Robbert,\n\nDit is een brief.\n";
    let letter = letter_pipeline::stages::StandInComposer
        .compose(Address::new("werkstraat", 2, "Rdam"), Customer::new(5, "Robbert"), body)
        .unwrap();
    assert_eq!(letter.body, body);
}

/// Events carry one run id from start to finish
#[test]
fn test_events_share_run_id() {
    let run_ids = Arc::new(Mutex::new(Vec::new()));
    let sink = run_ids.clone();
    let mut pipeline = LetterPipeline::from_config(&PipelineConfig::default());
    pipeline.add_event_handler(move |event| {
        let id = match event {
            PipelineEvent::RunStarted { run_id, .. }
            | PipelineEvent::StageCompleted { run_id, .. }
            | PipelineEvent::StageFailed { run_id, .. }
            | PipelineEvent::RunFinished { run_id, .. } => run_id,
        };
        sink.lock().unwrap().push(id);
    });

    let report = pipeline.execute(&LetterRequest::new(5, BODY));
    let run_ids = run_ids.lock().unwrap();

    assert_eq!(run_ids.len(), 7);
    assert!(run_ids.iter().all(|id| *id == report.run_id()));
}
