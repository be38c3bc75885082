//! # Manager Errors
//!
//! The manager surfaces component failures unchanged and adds the checks
//! only it can make. `ErrorKind` buckets every failure into the protocol's
//! five rejection categories, which is what transports report upstream.

use il_02_binding_store::StoreError;
use il_03_claim_registry::ClaimError;
use il_04_attestation::AttestationError;
use shared_types::AppId;
use thiserror::Error;

/// Errors from identity manager entry points.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ManagerError {
    /// Attestation verification failed.
    #[error(transparent)]
    Attestation(#[from] AttestationError),

    /// Binding store rejected the mutation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Claim registry rejected the operation.
    #[error(transparent)]
    Claim(#[from] ClaimError),

    /// A non-primary entry arrived without a signature.
    #[error("signature required for app {app_id}")]
    SignatureRequired { app_id: AppId },

    /// The caller holds no binding for this application.
    #[error("no identity found for app {app_id} and old address")]
    IdentityNotFound { app_id: AppId },

    /// The binding a claim targets does not exist.
    #[error("claimed identity not found")]
    ClaimedIdentityNotFound { app_id: AppId },

    /// The claimant already owns a binding for this application.
    #[error("claimer owns some identity for app {app_id}")]
    ClaimerOwnsIdentity { app_id: AppId },

    /// Primary identities are self-asserted and can not be contested.
    #[error("primary identities can not be claimed")]
    PrimaryNotClaimable,
}

/// The protocol's rejection categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad signature, expired attestation, or missing capability/role.
    Authorization,
    /// A uniqueness invariant would be violated.
    Uniqueness,
    /// The referenced binding, claim, or validator does not exist.
    NotFound,
    /// Probation not elapsed or claim window closed.
    Timing,
    /// Malformed input (zero address, unset id, missing signature).
    InvalidInput,
}

impl ManagerError {
    /// Bucket this failure into its rejection category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            // Every attestation failure is an authorization failure: a bad
            // or stale signature never reaches the ledger.
            ManagerError::Attestation(_) => ErrorKind::Authorization,
            ManagerError::Store(error) => match error {
                StoreError::NotAdmin | StoreError::NotManager => ErrorKind::Authorization,
                StoreError::OwnerAlreadyBound { .. }
                | StoreError::IdAlreadyBound { .. }
                | StoreError::ManagerAlreadyGranted => ErrorKind::Uniqueness,
                StoreError::BindingNotFound { .. } | StoreError::ManagerNotGranted => {
                    ErrorKind::NotFound
                }
                StoreError::ZeroAddress
                | StoreError::UnsetExternalId
                | StoreError::ReservedApp(_) => ErrorKind::InvalidInput,
            },
            ManagerError::Claim(error) => match error {
                ClaimError::NotOwner | ClaimError::NotManager | ClaimError::NotClaimant => {
                    ErrorKind::Authorization
                }
                ClaimError::ClaimPending
                | ClaimError::ClaimantBusy { .. }
                | ClaimError::ManagerAlreadyGranted => ErrorKind::Uniqueness,
                ClaimError::BindingNotFound { .. }
                | ClaimError::NoActiveClaim
                | ClaimError::ManagerNotGranted => ErrorKind::NotFound,
                ClaimError::ProbationNotElapsed { .. } | ClaimError::ClaimExpired => {
                    ErrorKind::Timing
                }
                ClaimError::ZeroAddress => ErrorKind::InvalidInput,
            },
            ManagerError::SignatureRequired { .. } => ErrorKind::InvalidInput,
            ManagerError::IdentityNotFound { .. }
            | ManagerError::ClaimedIdentityNotFound { .. } => ErrorKind::NotFound,
            ManagerError::ClaimerOwnsIdentity { .. } => ErrorKind::Uniqueness,
            ManagerError::PrimaryNotClaimable => ErrorKind::InvalidInput,
        }
    }
}
