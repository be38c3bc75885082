//! # Claim Events

use serde::{Deserialize, Serialize};
use shared_types::{Address, AppId, ExternalId};

/// Claim lifecycle changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimEvent {
    /// A claim was recorded for a binding.
    ClaimStarted {
        app_id: AppId,
        external_id: ExternalId,
        claimant: Address,
    },
    /// A claim was canceled with no ownership change.
    ClaimCanceled {
        app_id: AppId,
        external_id: ExternalId,
        claimant: Address,
    },
    /// A claim was cleared for resolution; the ownership transfer follows
    /// in the binding store.
    ClaimResolved {
        app_id: AppId,
        external_id: ExternalId,
        claimant: Address,
    },
}
