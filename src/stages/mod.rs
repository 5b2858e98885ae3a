//! Pipeline stages
//!
//! Each stage sits behind a trait so the stand-ins can be swapped for real
//! services or test doubles. The traits describe what a stage can produce,
//! not how a failure travels; that is up to the orchestrator's discipline.

pub mod error;
pub mod stand_in;

use crate::core::{Address, Customer, CustomerId, Letter, SendResult};
use std::sync::Arc;

pub use error::{ComposeError, SendError};
pub use stand_in::{
    StandInAddressBook, StandInClassifier, StandInComposer, StandInDirectory, StandInSender,
};

/// Resolves customer identifiers
pub trait CustomerDirectory: Send + Sync {
    /// Find a customer; `None` when the directory does not know the id
    fn find_customer(&self, id: CustomerId) -> Option<Customer>;
}

/// Decides the customer category
pub trait CustomerClassifier: Send + Sync {
    fn is_business_customer(&self, customer: &Customer) -> bool;
}

/// Knows where customers live and work
pub trait AddressBook: Send + Sync {
    /// Every customer has a home address
    fn home_address(&self, customer: &Customer) -> Address;

    /// A work address may be missing
    fn work_address(&self, customer: &Customer) -> Option<Address>;
}

/// Builds letters
pub trait LetterComposer: Send + Sync {
    fn compose(&self, address: Address, customer: Customer, body: &str)
        -> Result<Letter, ComposeError>;
}

/// Dispatches letters
pub trait LetterSender: Send + Sync {
    fn send(&self, letter: &Letter) -> Result<SendResult, SendError>;
}

/// Pick the address a letter goes to
///
/// Non-business customers always get their home address. Business customers
/// get their work address or nothing; a missing work address never falls back
/// to the home address.
pub fn resolve_address(
    book: &dyn AddressBook,
    customer: &Customer,
    is_business: bool,
) -> Option<Address> {
    if is_business {
        book.work_address(customer)
    } else {
        Some(book.home_address(customer))
    }
}

/// The set of collaborators one pipeline runs with
#[derive(Clone)]
pub struct Stages {
    pub directory: Arc<dyn CustomerDirectory>,
    pub classifier: Arc<dyn CustomerClassifier>,
    pub addresses: Arc<dyn AddressBook>,
    pub composer: Arc<dyn LetterComposer>,
    pub sender: Arc<dyn LetterSender>,
}

impl Stages {
    /// Stand-in stages built from configuration
    pub fn stand_in(config: &crate::core::config::PipelineConfig) -> Self {
        Self {
            directory: Arc::new(StandInDirectory::from_config(&config.directory)),
            classifier: Arc::new(StandInClassifier::new(config.business_customers.clone())),
            addresses: Arc::new(StandInAddressBook::from_config(config)),
            composer: Arc::new(StandInComposer),
            sender: Arc::new(StandInSender::new(config.sender.status.clone())),
        }
    }

    pub fn with_directory(mut self, directory: Arc<dyn CustomerDirectory>) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn CustomerClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_addresses(mut self, addresses: Arc<dyn AddressBook>) -> Self {
        self.addresses = addresses;
        self
    }

    pub fn with_composer(mut self, composer: Arc<dyn LetterComposer>) -> Self {
        self.composer = composer;
        self
    }

    pub fn with_sender(mut self, sender: Arc<dyn LetterSender>) -> Self {
        self.sender = sender;
        self
    }
}

impl Default for Stages {
    fn default() -> Self {
        Self::stand_in(&crate::core::config::PipelineConfig::default())
    }
}

impl std::fmt::Debug for Stages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stages").finish_non_exhaustive()
    }
}
