//! # Shared Types Crate
//!
//! This crate contains the primitive domain types shared across IdLink
//! subsystems: addresses, application and external identifiers, label
//! encodings, and the clock port.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem primitives are defined
//!   here.
//! - **No protocol logic**: Nothing in this crate checks a capability or
//!   mutates ledger state; it only defines the vocabulary the subsystems
//!   speak.

pub mod clock;
pub mod encoding;
pub mod entities;

pub use clock::{Clock, ManualClock, SystemClock};
pub use encoding::EncodingError;
pub use entities::*;
