//! Ports layer: trait boundaries toward other subsystems.

pub mod outbound;
