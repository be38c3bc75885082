//! Ports layer: the inbound API and the outbound gateways.

pub mod inbound;
pub mod outbound;
