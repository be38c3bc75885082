//! # Store Service
//!
//! Thread-safe facade over [`BindingStore`]. One write-lock acquisition per
//! entry point gives the ledger-style total order: a batch bind is atomic
//! against every concurrent caller, not just internally.

use crate::domain::entities::BindRequest;
use crate::domain::errors::StoreError;
use crate::domain::store::BindingStore;
use crate::events::StoreEvent;
use parking_lot::RwLock;
use shared_types::{address_to_hex, Address, AppId, Bytes32, ExternalId};
use tracing::{debug, info};

/// Shared binding store handle.
pub struct StoreService {
    state: RwLock<BindingStore>,
    events: RwLock<Vec<StoreEvent>>,
}

impl StoreService {
    /// Create a service around an empty store administered by `admin`.
    pub fn new(admin: Address) -> Self {
        Self {
            state: RwLock::new(BindingStore::new(admin)),
            events: RwLock::new(Vec::new()),
        }
    }

    /// Grant the manager capability to `address`. Admin only.
    pub fn grant_manager(&self, caller: &Address, address: Address) -> Result<(), StoreError> {
        self.state.write().grant_manager(caller, address)?;
        info!(manager = %address_to_hex(&address), "manager capability granted");
        Ok(())
    }

    /// Revoke the manager capability from `address`. Admin only.
    pub fn revoke_manager(&self, caller: &Address, address: Address) -> Result<(), StoreError> {
        self.state.write().revoke_manager(caller, address)?;
        info!(manager = %address_to_hex(&address), "manager capability revoked");
        Ok(())
    }

    /// True if `address` holds the manager capability.
    pub fn is_manager(&self, address: &Address) -> bool {
        self.state.read().is_manager(address)
    }

    /// Register an application label. Admin only.
    pub fn add_app(&self, caller: &Address, label: Bytes32) -> Result<StoreEvent, StoreError> {
        let event = self.state.write().add_app(caller, label)?;
        self.events.write().push(event.clone());
        Ok(event)
    }

    /// Label of a registered application.
    pub fn app_label(&self, app_id: AppId) -> Option<Bytes32> {
        self.state.read().app_label(app_id)
    }

    /// Highest registered app id.
    pub fn last_app_id(&self) -> AppId {
        self.state.read().last_app_id()
    }

    /// Create one binding. Manager only.
    pub fn bind(&self, caller: &Address, request: BindRequest) -> Result<StoreEvent, StoreError> {
        let event = self.state.write().bind(caller, request)?;
        if let StoreEvent::BindingCreated {
            app_id, owner, ..
        } = &event
        {
            info!(app_id, owner = %address_to_hex(owner), "binding created");
        }
        self.events.write().push(event.clone());
        Ok(event)
    }

    /// Create a batch of bindings, all-or-nothing. Manager only.
    pub fn bind_many(
        &self,
        caller: &Address,
        requests: Vec<BindRequest>,
    ) -> Result<Vec<StoreEvent>, StoreError> {
        let count = requests.len();
        let events = self.state.write().bind_many(caller, requests)?;
        debug!(count, "batch bind applied");
        self.events.write().extend(events.iter().cloned());
        Ok(events)
    }

    /// Reassign a binding to a new owner. Manager only.
    pub fn reassign(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        new_owner: Address,
    ) -> Result<StoreEvent, StoreError> {
        let event = self
            .state
            .write()
            .reassign(caller, app_id, external_id, new_owner)?;
        info!(app_id, owner = %address_to_hex(&new_owner), "binding updated");
        self.events.write().push(event.clone());
        Ok(event)
    }

    /// Owner of `(app_id, external_id)`, if bound.
    pub fn owner_by_id(&self, app_id: AppId, external_id: ExternalId) -> Option<Address> {
        self.state.read().owner_by_id(app_id, external_id)
    }

    /// External id held by `owner` under `app_id`, if any.
    pub fn id_by_owner(&self, app_id: AppId, owner: &Address) -> Option<ExternalId> {
        self.state.read().id_by_owner(app_id, owner)
    }

    /// Snapshot of all emitted events, oldest first.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.read().clone()
    }
}
