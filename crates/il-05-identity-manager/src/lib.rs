//! # Identity Manager Subsystem (IL-05)
//!
//! The protocol's public entry surface. Every operation first runs the
//! attestation verifier (except the self-asserted primary-identity path),
//! then mutates the binding store and/or the claim registry under the
//! manager capability.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Entry-point request types and the error
//!   taxonomy
//! - **Ports Layer** (`ports/`): The inbound `IdentityApi` and the outbound
//!   gateways toward verifier, store, and claim registry
//! - **Adapters Layer** (`adapters/`): Gateway implementations over the
//!   concrete subsystem services
//! - **Service Layer** (`service.rs`): The state machine itself
//!
//! ## State machine per binding
//!
//! `Unbound -> Bound` via `set_identity`; `Bound -> Bound(new owner)` via
//! `update_identity`; orthogonally `Bound -> ClaimPending -> Bound(claimant)`
//! via `claim_identity` + `update_claimed_identity`, or back to the original
//! owner via cancellation/expiry. No terminal state: ownership can always be
//! re-contested.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::BatchEntry;
pub use domain::errors::{ErrorKind, ManagerError};
pub use ports::inbound::IdentityApi;
pub use ports::outbound::{AttestationGateway, BindingStoreGateway, ClaimGateway};
pub use service::ManagerService;
