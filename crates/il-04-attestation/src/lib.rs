//! # Attestation Verification Subsystem (IL-04)
//!
//! Turns a signed off-chain statement ("this address controls this
//! external identifier") into a verified tuple, or rejects it. Verification
//! recomputes the canonical message digest, recovers the secp256k1 signer,
//! checks the signer against the validator directory, and enforces the
//! per-application freshness window.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure cryptography and the wire format,
//!   no I/O
//! - **Ports Layer** (`ports/`): Outbound `ValidatorLookup` trait toward
//!   the directory
//! - **Service Layer** (`service.rs`): Wires domain logic to ports and the
//!   clock; owner-gated validity-window configuration is its only state
//!
//! ## Security Notes
//!
//! - **Malleability**: signatures with a high S value are rejected, so one
//!   attestation has exactly one accepted signature encoding
//! - **Domain separation**: the digest binds a versioned tag and the chain
//!   id; attestations can not be replayed across deployments or networks

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::codec::{attestation_digest, Attestation, ATTESTATION_DOMAIN_V1};
pub use domain::ecdsa::{keccak256, recover_address, signer_address};
pub use domain::entities::{EcdsaSignature, VerifiedAttestation};
pub use domain::errors::AttestationError;
pub use domain::signer::sign_digest;
pub use ports::outbound::ValidatorLookup;
pub use service::AttestationService;
