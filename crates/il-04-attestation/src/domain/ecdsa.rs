//! # ECDSA Recovery (secp256k1)
//!
//! Pure signature handling: validate the signature encoding, recover the
//! signer's public key, derive the Ethereum-style address.
//!
//! ## Security Notes
//!
//! - S must lie in the lower half of the curve order; the high-S twin of a
//!   signature is rejected, never normalized on the way in
//! - R and S must be in `[1, n-1]`
//! - Scalar comparisons run in constant time (`subtle`)

use super::entities::EcdsaSignature;
use super::errors::AttestationError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// secp256k1 curve order n.
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// n / 2, the malleability boundary: valid S is strictly below this.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Keccak256 hash.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&digest);
    hash
}

/// Derive the Ethereum-style address from a public key: last 20 bytes of
/// keccak256 over the uncompressed point without its 0x04 prefix.
pub fn signer_address(public_key: &VerifyingKey) -> Address {
    let encoded = public_key.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Validate the signature encoding and recover the signer address for a
/// prehashed message.
pub fn recover_address(
    digest: &Hash,
    signature: &EcdsaSignature,
) -> Result<Address, AttestationError> {
    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(AttestationError::InvalidFormat);
    }
    if !is_low_s(&signature.s) {
        return Err(AttestationError::MalleableSignature);
    }
    let recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);
    let parsed = Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();
    let sig = parsed.map_err(|_| AttestationError::InvalidFormat)?;

    let key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| AttestationError::RecoveryFailed)?;
    Ok(signer_address(&key))
}

/// Constant-time check that `s` is strictly below n/2.
pub(crate) fn is_low_s(s: &[u8; 32]) -> bool {
    // Walk all 32 bytes without early return; the first differing byte
    // decides, later bytes are masked out.
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);
    for i in 0..32 {
        let undecided = !(less | greater);
        let byte_less = Choice::from((s[i] < SECP256K1_HALF_ORDER[i]) as u8);
        let byte_greater = Choice::from((s[i] > SECP256K1_HALF_ORDER[i]) as u8);
        less |= undecided & byte_less;
        greater |= undecided & byte_greater;
    }
    less.into()
}

/// Constant-time check that a scalar is in `[1, n-1]`.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for &byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);
    for i in 0..32 {
        let undecided = !(less | greater);
        let byte_less = Choice::from((scalar[i] < SECP256K1_ORDER[i]) as u8);
        let byte_greater = Choice::from((scalar[i] > SECP256K1_ORDER[i]) as u8);
        less |= undecided & byte_less;
        greater |= undecided & byte_greater;
    }

    (!is_zero & less).into()
}

/// n - s, the high-S twin of a signature's S component.
pub(crate) fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;
    for i in (0..32).rev() {
        let diff = i32::from(SECP256K1_ORDER[i]) - i32::from(s[i]) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }
    result
}

/// Accepts both the raw (0/1) and the Ethereum (27/28) recovery id form.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, AttestationError> {
    let id = match v {
        0 | 27 => 0u8,
        1 | 28 => 1u8,
        _ => return Err(AttestationError::InvalidRecoveryId(v)),
    };
    RecoveryId::try_from(id).map_err(|_| AttestationError::InvalidRecoveryId(v))
}
