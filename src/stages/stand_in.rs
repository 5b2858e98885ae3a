//! Deterministic stand-in stages

use crate::core::{
    config::{DirectoryConfig, PipelineConfig},
    Address, Customer, CustomerId, Letter, SendResult,
};
use crate::stages::{
    AddressBook, ComposeError, CustomerClassifier, CustomerDirectory, LetterComposer,
    LetterSender, SendError,
};

/// Directory that knows every id except one
#[derive(Debug, Clone)]
pub struct StandInDirectory {
    customer_name: String,
    missing_id: CustomerId,
}

impl StandInDirectory {
    pub fn new(customer_name: impl Into<String>, missing_id: CustomerId) -> Self {
        Self {
            customer_name: customer_name.into(),
            missing_id,
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(config.customer_name.clone(), config.missing_customer_id)
    }
}

impl CustomerDirectory for StandInDirectory {
    fn find_customer(&self, id: CustomerId) -> Option<Customer> {
        if id == self.missing_id {
            None
        } else {
            Some(Customer::new(id, self.customer_name.clone()))
        }
    }
}

/// Classifies customers by name
#[derive(Debug, Clone)]
pub struct StandInClassifier {
    business_names: Vec<String>,
}

impl StandInClassifier {
    pub fn new(business_names: Vec<String>) -> Self {
        Self { business_names }
    }
}

impl CustomerClassifier for StandInClassifier {
    fn is_business_customer(&self, customer: &Customer) -> bool {
        self.business_names.iter().any(|name| *name == customer.name)
    }
}

/// Hands every customer the same home and (optional) work address
#[derive(Debug, Clone)]
pub struct StandInAddressBook {
    home: Address,
    work: Option<Address>,
}

impl StandInAddressBook {
    pub fn new(home: Address, work: Option<Address>) -> Self {
        Self { home, work }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            Address::from(&config.home_address),
            config.work_address.as_ref().map(Address::from),
        )
    }
}

impl AddressBook for StandInAddressBook {
    fn home_address(&self, _customer: &Customer) -> Address {
        self.home.clone()
    }

    fn work_address(&self, _customer: &Customer) -> Option<Address> {
        self.work.clone()
    }
}

/// Composer that accepts any body
#[derive(Debug, Clone, Copy, Default)]
pub struct StandInComposer;

impl LetterComposer for StandInComposer {
    fn compose(
        &self,
        address: Address,
        customer: Customer,
        body: &str,
    ) -> Result<Letter, ComposeError> {
        Ok(Letter {
            body: body.to_string(),
            address,
            customer,
        })
    }
}

/// Sender that confirms every letter with a fixed status
#[derive(Debug, Clone)]
pub struct StandInSender {
    status: String,
}

impl StandInSender {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

impl LetterSender for StandInSender {
    fn send(&self, _letter: &Letter) -> Result<SendResult, SendError> {
        Ok(SendResult::new(self.status.clone()))
    }
}
