//! # Outbound Ports
//!
//! Validator membership is the directory's business; verification only asks
//! one question through this port.

use shared_types::{Address, AppId};

/// Membership view of the validator directory.
pub trait ValidatorLookup: Send + Sync {
    /// True if `address` may sign attestations for `app_id` (dedicated
    /// group member or the default signer, per directory policy).
    fn is_validator_for_group(&self, app_id: AppId, address: &Address) -> bool;
}
