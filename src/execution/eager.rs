//! Eager-unwrap discipline
//!
//! Every stage gets its own error type and every function in the chain
//! declares the errors it can return. The composing function is a flat list
//! of "check, then proceed" statements, and the boundary matches each error
//! type explicitly.

use crate::{
    core::{
        Address, Customer, CustomerId, Letter, PipelineFailure, SendResult, ADDRESS_NOT_FOUND,
        CUSTOMER_NOT_FOUND,
    },
    execution::executor::StageRun,
    stages::{ComposeError, SendError},
};
use thiserror::Error;
use tracing::debug;

/// The directory does not know the customer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", CUSTOMER_NOT_FOUND)]
pub struct CustomerNotFound {
    pub customer_id: CustomerId,
}

/// A business customer has no work address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", ADDRESS_NOT_FOUND)]
pub struct AddressNotFound {
    pub customer_id: CustomerId,
}

/// The composer rejected the letter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct LetterNotComposed(#[from] pub ComposeError);

/// The sender could not dispatch the letter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct LetterNotSent(#[from] pub SendError);

/// Everything [`send_letter`] declares it can fail with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckedFailure {
    #[error(transparent)]
    Customer(#[from] CustomerNotFound),

    #[error(transparent)]
    Address(#[from] AddressNotFound),

    #[error(transparent)]
    Compose(#[from] LetterNotComposed),

    #[error(transparent)]
    Send(#[from] LetterNotSent),
}

impl From<CheckedFailure> for PipelineFailure {
    fn from(failure: CheckedFailure) -> Self {
        match failure {
            CheckedFailure::Customer(e) => {
                debug!("No customer with id {} in the directory", e.customer_id);
                PipelineFailure::customer_not_found()
            }
            CheckedFailure::Address(e) => {
                debug!("No work address for business customer {}", e.customer_id);
                PipelineFailure::address_not_found()
            }
            CheckedFailure::Compose(e) => PipelineFailure::compose_failed(e.to_string()),
            CheckedFailure::Send(e) => PipelineFailure::send_failed(e.to_string()),
        }
    }
}

/// Run all stages, stopping at the first error
pub fn send_letter(
    run: &mut StageRun<'_>,
    customer_id: CustomerId,
    body: &str,
) -> Result<SendResult, CheckedFailure> {
    let customer = find_customer(run, customer_id)?;
    let is_business = run.classify(&customer);
    let address = find_address(run, &customer, is_business)?;
    let letter = compose_letter(run, address, customer, body)?;
    let sent = send(run, &letter)?;
    Ok(sent)
}

fn find_customer(run: &mut StageRun<'_>, customer_id: CustomerId) -> Result<Customer, CustomerNotFound> {
    match run.find_customer(customer_id) {
        Some(customer) => Ok(customer),
        None => Err(CustomerNotFound { customer_id }),
    }
}

fn find_address(
    run: &mut StageRun<'_>,
    customer: &Customer,
    is_business: bool,
) -> Result<Address, AddressNotFound> {
    match run.find_address(customer, is_business) {
        Some(address) => Ok(address),
        None => Err(AddressNotFound {
            customer_id: customer.id,
        }),
    }
}

fn compose_letter(
    run: &mut StageRun<'_>,
    address: Address,
    customer: Customer,
    body: &str,
) -> Result<Letter, LetterNotComposed> {
    let letter = run.compose(address, customer, body)?;
    Ok(letter)
}

fn send(run: &mut StageRun<'_>, letter: &Letter) -> Result<SendResult, LetterNotSent> {
    let sent = run.send(letter)?;
    Ok(sent)
}
