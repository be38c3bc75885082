//! # Domain Entities
//!
//! Validator group membership records and the fallback policy flag.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Bytes32};

/// One authorized signer inside an application's validator group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorEntry {
    /// Human-readable label, fixed-width encoded.
    pub label: Bytes32,
    /// The signer address.
    pub address: Address,
}

/// Scope of the default fallback signer.
///
/// Whether the fallback applies everywhere or only to applications without a
/// dedicated group is a deployment decision; it is a single explicit flag
/// rather than per-call behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackPolicy {
    /// The default signer is only consulted for an application with zero
    /// dedicated validators.
    #[default]
    GroupsWithoutValidators,
    /// The default signer is accepted for every application.
    AllGroups,
}
