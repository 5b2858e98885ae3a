//! Explicit-outcome discipline
//!
//! Every stage returns a `Result` with [`PipelineFailure`] on the error side
//! and the composition is a chain of `and_then`/`map`. The first `Err`
//! skips the rest of the chain and arrives at the boundary unchanged.

use crate::{
    core::{Address, Customer, CustomerId, Letter, PipelineFailure, SendResult},
    execution::executor::StageRun,
};

/// Run all stages, short-circuiting on the first failure
pub fn send_letter(
    run: &mut StageRun<'_>,
    customer_id: CustomerId,
    body: &str,
) -> Result<SendResult, PipelineFailure> {
    find_customer(run, customer_id)
        .map(|customer| {
            let is_business = run.classify(&customer);
            (customer, is_business)
        })
        .and_then(|(customer, is_business)| {
            find_address(run, &customer, is_business).map(|address| (address, customer))
        })
        .and_then(|(address, customer)| compose_letter(run, address, customer, body))
        .and_then(|letter| send(run, &letter))
}

fn find_customer(run: &mut StageRun<'_>, customer_id: CustomerId) -> Result<Customer, PipelineFailure> {
    run.find_customer(customer_id)
        .ok_or_else(PipelineFailure::customer_not_found)
}

fn find_address(
    run: &mut StageRun<'_>,
    customer: &Customer,
    is_business: bool,
) -> Result<Address, PipelineFailure> {
    run.find_address(customer, is_business)
        .ok_or_else(PipelineFailure::address_not_found)
}

fn compose_letter(
    run: &mut StageRun<'_>,
    address: Address,
    customer: Customer,
    body: &str,
) -> Result<Letter, PipelineFailure> {
    run.compose(address, customer, body)
        .map_err(|e| PipelineFailure::compose_failed(e.to_string()))
}

fn send(run: &mut StageRun<'_>, letter: &Letter) -> Result<SendResult, PipelineFailure> {
    run.send(letter)
        .map_err(|e| PipelineFailure::send_failed(e.to_string()))
}
