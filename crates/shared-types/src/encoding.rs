//! # Identifier Encodings
//!
//! Conversions between the wire/storage forms of identifiers and their
//! in-memory types:
//!
//! - fixed-width `Bytes32` labels for application and validator names;
//! - decimal-digit account ids of arbitrary length into `ExternalId`;
//! - case-insensitive base-36 mapping of alphanumeric handles into
//!   `ExternalId`, for platforms whose account ids are not numeric.

use crate::entities::{Bytes32, ExternalId, U256};
use thiserror::Error;

/// Errors from identifier encoding and parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// Label longer than the fixed 32-byte storage width.
    #[error("label exceeds 32 bytes: {0} bytes")]
    LabelTooLong(usize),

    /// Empty input where at least one character is required.
    #[error("empty identifier")]
    Empty,

    /// Character outside the accepted alphabet.
    #[error("invalid character {0:?} in identifier")]
    InvalidCharacter(char),

    /// Identifier does not fit in 256 bits.
    #[error("identifier overflows 256 bits")]
    Overflow,
}

/// Encode a label into fixed-width `Bytes32` storage, zero-padded on the
/// right. Truncation is the caller's responsibility: oversized input is an
/// error, not a silent cut.
pub fn str_to_bytes32(label: &str) -> Result<Bytes32, EncodingError> {
    let bytes = label.as_bytes();
    if bytes.len() > 32 {
        return Err(EncodingError::LabelTooLong(bytes.len()));
    }
    let mut out = [0u8; 32];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

/// Decode a `Bytes32` label back into a string, stopping at the first NUL
/// pad byte. Non-UTF-8 content yields `None`.
pub fn bytes32_to_str(label: &Bytes32) -> Option<String> {
    let end = label.iter().position(|&b| b == 0).unwrap_or(32);
    std::str::from_utf8(&label[..end]).ok().map(str::to_owned)
}

/// Parse a decimal-digit string into an `ExternalId`.
///
/// Platforms hand out numeric account ids that routinely exceed `u64`; this
/// accepts any digit string up to the 256-bit range.
pub fn external_id_from_decimal(digits: &str) -> Result<ExternalId, EncodingError> {
    if digits.is_empty() {
        return Err(EncodingError::Empty);
    }
    let mut value = U256::zero();
    for c in digits.chars() {
        let d = c
            .to_digit(10)
            .ok_or(EncodingError::InvalidCharacter(c))? as u64;
        value = value
            .checked_mul(U256::from(10u64))
            .and_then(|v| v.checked_add(U256::from(d)))
            .ok_or(EncodingError::Overflow)?;
    }
    Ok(value)
}

/// Map an alphanumeric handle onto a numeric `ExternalId` via a
/// case-insensitive base-36 expansion (`0-9` then `a-z`).
///
/// The mapping is injective over lowercase-normalized input, so two distinct
/// handles never collide on one external id.
pub fn external_id_from_alphanumeric(handle: &str) -> Result<ExternalId, EncodingError> {
    if handle.is_empty() {
        return Err(EncodingError::Empty);
    }
    let mut value = U256::zero();
    for c in handle.chars() {
        let d = match c {
            '0'..='9' => c as u64 - '0' as u64,
            'a'..='z' => 10 + c as u64 - 'a' as u64,
            'A'..='Z' => 10 + c as u64 - 'A' as u64,
            _ => return Err(EncodingError::InvalidCharacter(c)),
        };
        value = value
            .checked_mul(U256::from(36u64))
            .and_then(|v| v.checked_add(U256::from(d)))
            .ok_or(EncodingError::Overflow)?;
    }
    Ok(value)
}
