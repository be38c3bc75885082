//! # Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// ECDSA signature on the secp256k1 curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

/// A successfully verified attestation: the statement plus the validator
/// that signed it. Verification mutates nothing; consuming the tuple is the
/// caller's business.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedAttestation {
    /// The verified statement.
    pub attestation: super::codec::Attestation,
    /// The recovered validator address.
    pub signer: Address,
}
