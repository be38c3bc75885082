//! # Store Events
//!
//! Emitted on every ledger mutation and retained in the service event log,
//! the way an on-chain store would surface them to indexers.

use serde::{Deserialize, Serialize};
use shared_types::{Address, AppId, Bytes32, ExternalId};

/// Binding ledger changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreEvent {
    /// A new binding was created.
    BindingCreated {
        app_id: AppId,
        external_id: ExternalId,
        owner: Address,
    },
    /// An existing binding was reassigned to a new owner.
    BindingUpdated {
        app_id: AppId,
        external_id: ExternalId,
        owner: Address,
    },
    /// An application label was registered.
    AppRegistered { app_id: AppId, label: Bytes32 },
}
