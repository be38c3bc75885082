//! # Attestation Signing
//!
//! The validator-side half of the wire format: produce a low-S normalized,
//! recoverable signature over an attestation digest. Validators run this
//! off-chain; the protocol core only ever verifies.

use super::ecdsa::{invert_s, is_low_s};
use super::entities::EcdsaSignature;
use super::errors::AttestationError;
use k256::ecdsa::SigningKey;
use shared_types::Hash;

/// Sign a prehashed attestation digest.
///
/// The S component is normalized to the lower half of the curve order and
/// the recovery id flipped accordingly, so the result always passes the
/// verifier's malleability check. `v` uses the Ethereum 27/28 convention.
pub fn sign_digest(key: &SigningKey, digest: &Hash) -> Result<EcdsaSignature, AttestationError> {
    let (signature, recovery_id) = key
        .sign_prehash_recoverable(digest)
        .map_err(|_| AttestationError::RecoveryFailed)?;

    let bytes = signature.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    s.copy_from_slice(&bytes[32..]);

    if is_low_s(&s) {
        Ok(EcdsaSignature {
            r,
            s,
            v: recovery_id.to_byte() + 27,
        })
    } else {
        // Flipping S across the curve order flips the recovered key's
        // y-parity, so the recovery id flips with it.
        Ok(EcdsaSignature {
            r,
            s: invert_s(&s),
            v: if recovery_id.to_byte() == 0 { 28 } else { 27 },
        })
    }
}
