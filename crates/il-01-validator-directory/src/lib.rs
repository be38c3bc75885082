//! # Validator Directory Subsystem (IL-01)
//!
//! Per-application sets of addresses authorized to sign binding
//! attestations, plus one optional default fallback signer.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure group membership logic, no locking
//! - **Service Layer** (`service.rs`): Thread-safe facade with the owner
//!   capability check applied to every mutation
//!
//! Membership reads are public and side-effect-free; all mutations are
//! restricted to the directory owner.

pub mod domain;
pub mod events;
pub mod service;

// Re-export public API
pub use domain::directory::ValidatorDirectory;
pub use domain::entities::{FallbackPolicy, ValidatorEntry};
pub use domain::errors::DirectoryError;
pub use events::DirectoryEvent;
pub use service::DirectoryService;
