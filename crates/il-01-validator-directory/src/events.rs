//! # Directory Events
//!
//! Emitted on every group mutation and retained in the service event log.

use serde::{Deserialize, Serialize};
use shared_types::{Address, AppId};

/// Validator group membership changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectoryEvent {
    /// A validator was registered for an application.
    ValidatorAdded { app_id: AppId, validator: Address },
    /// A validator was removed from an application.
    ValidatorRemoved { app_id: AppId, validator: Address },
}
