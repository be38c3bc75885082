//! # Claim Errors

use shared_types::AppId;
use thiserror::Error;

/// Errors from claim registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClaimError {
    /// Caller does not hold the registry owner role.
    #[error("caller is not the registry owner")]
    NotOwner,

    /// Caller does not hold the manager capability.
    #[error("caller lacks the manager capability")]
    NotManager,

    /// A real (non-zero) address is required.
    #[error("address can not be the zero address")]
    ZeroAddress,

    /// The contested binding does not exist.
    #[error("claimed identity not found for app {app_id}")]
    BindingNotFound { app_id: AppId },

    /// Another claim is already active for this binding.
    #[error("active claim found for identity")]
    ClaimPending,

    /// The claimant already has an active claim within this application.
    #[error("claimant already has an active claim for app {app_id}")]
    ClaimantBusy { app_id: AppId },

    /// No active claim exists for the given binding or caller.
    #[error("no active claim found")]
    NoActiveClaim,

    /// Caller is neither the recorded claimant nor the registry owner.
    #[error("caller is not the claimant")]
    NotClaimant,

    /// Resolution attempted before the probation period elapsed.
    #[error("probation time not passed yet ({remaining_secs}s remaining)")]
    ProbationNotElapsed { remaining_secs: u64 },

    /// Resolution attempted after the claim window closed.
    #[error("claim is expired")]
    ClaimExpired,

    /// The manager capability was already granted to this address.
    #[error("manager capability already granted")]
    ManagerAlreadyGranted,

    /// The address does not hold the manager capability.
    #[error("manager capability not held")]
    ManagerNotGranted,
}
