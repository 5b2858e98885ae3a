//! Stage executor - runs individual stages and records progress

use crate::{
    core::{
        Address, AddressKind, Customer, CustomerId, Letter, PipelineFailure, RunProgress,
        RunState, SendResult, Stage,
    },
    execution::engine::{EventHandler, PipelineEvent},
    stages::{resolve_address, ComposeError, SendError, Stages},
};
use tracing::{debug, info};
use uuid::Uuid;

/// One run's view of the stages
///
/// Every method calls exactly one stage and records a transition when it
/// succeeds. The raw stage result is handed back untouched; turning a miss
/// into a failure is the discipline's job.
pub struct StageRun<'a> {
    stages: &'a Stages,
    handlers: &'a [EventHandler],
    progress: RunProgress,
}

impl<'a> StageRun<'a> {
    pub fn new(stages: &'a Stages, handlers: &'a [EventHandler]) -> Self {
        Self {
            stages,
            handlers,
            progress: RunProgress::new(),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.progress.run_id
    }

    pub fn progress(&self) -> &RunProgress {
        &self.progress
    }

    pub(crate) fn emit(&self, event: PipelineEvent) {
        for handler in self.handlers {
            handler(event.clone());
        }
    }

    pub(crate) fn start(&mut self) {
        self.progress.start();
    }

    pub(crate) fn into_progress(self) -> RunProgress {
        self.progress
    }

    /// Stage 1: look the customer up
    pub fn find_customer(&mut self, id: CustomerId) -> Option<Customer> {
        let customer = self.stages.directory.find_customer(id);
        match &customer {
            Some(found) => {
                debug!("Run {}: found customer {} ({})", self.run_id(), found.id, found.name);
                self.completed(Stage::Lookup);
            }
            None => debug!("Run {}: no customer with id {}", self.run_id(), id),
        }
        customer
    }

    /// Stage 2: classify the customer
    pub fn classify(&mut self, customer: &Customer) -> bool {
        let is_business = self.stages.classifier.is_business_customer(customer);
        debug!(
            "Run {}: customer {} is {}a business customer",
            self.run_id(),
            customer.id,
            if is_business { "" } else { "not " }
        );
        self.completed(Stage::Classify);
        is_business
    }

    /// Stage 3: pick the address the classification calls for
    pub fn find_address(&mut self, customer: &Customer, is_business: bool) -> Option<Address> {
        let kind = AddressKind::for_customer(is_business);
        let address = resolve_address(self.stages.addresses.as_ref(), customer, is_business);
        match &address {
            Some(found) => {
                debug!("Run {}: using {:?} address {}", self.run_id(), kind, found);
                self.completed(Stage::ResolveAddress);
            }
            None => debug!("Run {}: no {:?} address for customer {}", self.run_id(), kind, customer.id),
        }
        address
    }

    /// Stage 4: compose the letter
    pub fn compose(
        &mut self,
        address: Address,
        customer: Customer,
        body: &str,
    ) -> Result<Letter, ComposeError> {
        let letter = self.stages.composer.compose(address, customer, body);
        if letter.is_ok() {
            self.completed(Stage::Compose);
        }
        letter
    }

    /// Stage 5: send the letter
    pub fn send(&mut self, letter: &Letter) -> Result<SendResult, SendError> {
        let sent = self.stages.sender.send(letter);
        if let Ok(result) = &sent {
            info!("Run {}: letter sent with status {}", self.run_id(), result.status);
            self.completed(Stage::Send);
        }
        sent
    }

    /// Record the terminal failure of this run
    pub(crate) fn failed(&mut self, failure: &PipelineFailure) -> RunState {
        let stage = failure.kind.stage();
        let state = self.progress.fail(failure.kind);
        info!("Run {}: stage {} failed: {}", self.run_id(), stage, failure.message);
        self.emit(PipelineEvent::StageFailed {
            run_id: self.run_id(),
            stage,
            failure: failure.clone(),
        });
        state
    }

    /// Record an internal fault
    pub(crate) fn faulted(&mut self) {
        self.progress.fault();
    }

    fn completed(&mut self, stage: Stage) {
        let state = self.progress.complete_stage(stage);
        self.emit(PipelineEvent::StageCompleted {
            run_id: self.run_id(),
            stage,
            state,
        });
    }
}
