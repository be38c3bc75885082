//! # Integration Scenarios

pub mod claim_flows;
pub mod deployment;
pub mod invariants;
pub mod manager_flows;
