//! # Directory Errors

use shared_types::{Address, AppId};
use thiserror::Error;

/// Errors from validator directory operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// Caller does not hold the owner capability.
    #[error("caller is not the directory owner")]
    NotOwner,

    /// A validator address must not be the zero address.
    #[error("validator can not be the zero address")]
    ZeroAddress,

    /// The address is already registered for this application.
    #[error("validator already set for app {app_id}")]
    AlreadyRegistered { app_id: AppId },

    /// The address is not registered for this application.
    #[error("validator {} not found", shared_types::address_to_hex(.address))]
    NotRegistered { address: Address },

    /// Update where old and new addresses are identical.
    #[error("no changes")]
    NoChange,
}
