//! End-to-end scenarios, run under every discipline

mod business_customer;
mod equivalence;
mod stage_failures;
