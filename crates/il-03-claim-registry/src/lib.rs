//! # Claim Registry Subsystem (IL-03)
//!
//! Tracks at most one active claim per binding. A claim is a time-gated
//! contest: it can only be resolved after the probation period has elapsed
//! and before the claim window closes, both evaluated as pure timestamp
//! comparisons at call time; nothing here blocks or schedules.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Claim bookkeeping and the timing rules
//! - **Ports Layer** (`ports/`): Outbound `BindingReader` for existence
//!   checks against the binding store (read access only)
//! - **Service Layer** (`service.rs`): Thread-safe facade wired to a clock

pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{Claim, ProbationConfig};
pub use domain::errors::ClaimError;
pub use events::ClaimEvent;
pub use ports::outbound::BindingReader;
pub use service::ClaimService;
