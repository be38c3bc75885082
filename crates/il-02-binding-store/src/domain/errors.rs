//! # Store Errors

use shared_types::AppId;
use thiserror::Error;

/// Errors from binding store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Caller does not hold the admin role.
    #[error("caller is not the store admin")]
    NotAdmin,

    /// Caller does not hold the manager capability.
    #[error("caller lacks the manager capability")]
    NotManager,

    /// A real (non-zero) address is required.
    #[error("address can not be the zero address")]
    ZeroAddress,

    /// External id zero is the unset sentinel and can not be bound.
    #[error("external id zero is reserved as unset")]
    UnsetExternalId,

    /// The reserved primary application only accepts counter-allocated ids.
    #[error("app {0} is reserved for primary identities")]
    ReservedApp(AppId),

    /// The owner already holds a binding for this application.
    #[error("existing identity found for app {app_id} and address")]
    OwnerAlreadyBound { app_id: AppId },

    /// The external id is already bound for this application.
    #[error("existing identity found for app {app_id} and external id")]
    IdAlreadyBound { app_id: AppId },

    /// No binding exists for the given application and external id.
    #[error("no identity found for app {app_id}")]
    BindingNotFound { app_id: AppId },

    /// The manager capability was already granted to this address.
    #[error("manager capability already granted")]
    ManagerAlreadyGranted,

    /// The address does not hold the manager capability.
    #[error("manager capability not held")]
    ManagerNotGranted,
}
