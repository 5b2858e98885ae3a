//! Implicit-unwind discipline
//!
//! Stage failures are raised by unwinding with a [`FailureSignal`] payload.
//! Nothing in a signature says a function can fail, which leaves the
//! composing function free to chain `Option` combinators. The orchestrator
//! catches the unwind and sorts recognised signals from everything else.

use crate::{
    core::{CustomerId, PipelineFailure, SendResult},
    execution::executor::StageRun,
};
use std::any::Any;
use std::panic;

/// Unwind payload carrying a recognised failure
#[derive(Debug, Clone)]
pub struct FailureSignal(pub PipelineFailure);

/// Abort the current run with a recognised failure
///
/// Uses `resume_unwind`, so the panic hook does not fire and no backtrace is
/// printed for business-rule failures.
pub fn raise(failure: PipelineFailure) -> ! {
    panic::resume_unwind(Box::new(FailureSignal(failure)))
}

/// Sort a caught unwind payload into a recognised failure or a diagnostic
pub fn recover(payload: Box<dyn Any + Send>) -> Result<PipelineFailure, String> {
    match payload.downcast::<FailureSignal>() {
        Ok(signal) => Ok(signal.0),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Run all stages; raises on failure
pub fn send_letter(run: &mut StageRun<'_>, customer_id: CustomerId, body: &str) -> SendResult {
    run.find_customer(customer_id)
        .map(|customer| {
            let is_business = run.classify(&customer);
            run.find_address(&customer, is_business)
                .map(|address| {
                    let letter = run
                        .compose(address, customer, body)
                        .unwrap_or_else(|e| raise(PipelineFailure::compose_failed(e.to_string())));
                    run.send(&letter)
                        .unwrap_or_else(|e| raise(PipelineFailure::send_failed(e.to_string())))
                })
                .unwrap_or_else(|| raise(PipelineFailure::address_not_found()))
        })
        .unwrap_or_else(|| raise(PipelineFailure::customer_not_found()))
}
