//! # Core Entities
//!
//! Primitive identifier types used by every IdLink subsystem.

pub use primitive_types::U256;

/// Ethereum-style address (last 20 bytes of keccak256(pubkey)).
pub type Address = [u8; 20];

/// 32-byte hash value (keccak256 output).
pub type Hash = [u8; 32];

/// Fixed-width label storage (application names, validator labels).
pub type Bytes32 = [u8; 32];

/// Application identifier. Small positive integer assigned at registration.
pub type AppId = u64;

/// External-platform identifier. A `U256` so that decimal account ids longer
/// than native integer precision (and base-36 mapped alphanumeric handles)
/// fit without truncation. Zero is the unset sentinel.
pub type ExternalId = U256;

/// The all-zero address, rejected wherever a real principal is required.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Reserved application id for the platform-agnostic primary identity.
///
/// Bindings under this app require no external-platform proof; they are
/// self-asserted and their external ids come from a per-store counter.
pub const PRIMARY_APP_ID: AppId = 0;

/// Render an address as `0x`-prefixed lowercase hex.
pub fn address_to_hex(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

/// True unless `address` is the all-zero sentinel.
pub fn is_real_address(address: &Address) -> bool {
    *address != ZERO_ADDRESS
}
