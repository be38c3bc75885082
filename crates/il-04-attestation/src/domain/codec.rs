//! # Canonical Attestation Encoding (wire format v1)
//!
//! The message a validator signs is the keccak256 digest of a fixed-order
//! field concatenation under a versioned domain tag:
//!
//! ```text
//! digest = keccak256(
//!     ATTESTATION_DOMAIN_V1     # versioned tag
//!  || chain_id:    u64 BE       # deployment network
//!  || subject:     20 bytes     # address being attested
//!  || app_id:      u64 BE
//!  || external_id: 32 bytes BE
//!  || timestamp:   u64 BE
//! )
//! ```
//!
//! Any change to the tag, a width, or the field order invalidates every
//! previously issued attestation, so changes bump the version suffix.

use super::ecdsa::keccak256;
use serde::{Deserialize, Serialize};
use shared_types::{Address, AppId, ExternalId, Hash};

/// Domain-separation tag for attestation digests, wire format v1.
pub const ATTESTATION_DOMAIN_V1: &[u8] = b"idlink/attestation/v1";

/// The statement a validator signs: `subject` controls `external_id` on the
/// platform identified by `app_id`, as of `timestamp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// Address being attested.
    pub subject: Address,
    /// Application the external identifier belongs to.
    pub app_id: AppId,
    /// The external-platform identifier.
    pub external_id: ExternalId,
    /// Unix timestamp the attestation was issued at.
    pub timestamp: u64,
}

/// Compute the canonical signing digest for an attestation on `chain_id`.
pub fn attestation_digest(chain_id: u64, attestation: &Attestation) -> Hash {
    let mut message = Vec::with_capacity(ATTESTATION_DOMAIN_V1.len() + 8 + 20 + 8 + 32 + 8);
    message.extend_from_slice(ATTESTATION_DOMAIN_V1);
    message.extend_from_slice(&chain_id.to_be_bytes());
    message.extend_from_slice(&attestation.subject);
    message.extend_from_slice(&attestation.app_id.to_be_bytes());
    let mut external_id = [0u8; 32];
    attestation.external_id.to_big_endian(&mut external_id);
    message.extend_from_slice(&external_id);
    message.extend_from_slice(&attestation.timestamp.to_be_bytes());
    keccak256(&message)
}
