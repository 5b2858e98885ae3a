//! Letter domain models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer identifier as it arrives from the caller
pub type CustomerId = i32;

/// What the boundary hands to the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterRequest {
    pub customer_id: CustomerId,
    pub body: String,
}

impl LetterRequest {
    pub fn new(customer_id: CustomerId, body: impl Into<String>) -> Self {
        Self {
            customer_id,
            body: body.into(),
        }
    }
}

/// A customer found by the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Directory identifier
    pub id: CustomerId,

    /// Display name, also used for classification
    pub name: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A mailing address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub house_number: i32,
    pub city: String,
}

impl Address {
    pub fn new(street: impl Into<String>, house_number: i32, city: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            house_number,
            city: city.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.street, self.house_number, self.city)
    }
}

/// Which of the customer's addresses a letter goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    Home,
    Work,
}

impl AddressKind {
    /// Business customers are mailed at work, everyone else at home
    pub fn for_customer(is_business: bool) -> Self {
        if is_business {
            AddressKind::Work
        } else {
            AddressKind::Home
        }
    }
}

/// A composed letter, ready to be sent
///
/// Only a [`crate::stages::LetterComposer`] produces these, so holding one
/// means a customer and an address were resolved for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    pub body: String,
    pub address: Address,
    pub customer: Customer,
}

/// Confirmation returned by the sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    pub status: String,
}

impl SendResult {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
