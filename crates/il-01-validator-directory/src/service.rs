//! # Directory Service
//!
//! Thread-safe facade over [`ValidatorDirectory`]. Every mutation runs to
//! completion under one write-lock acquisition and appends its events to the
//! retained log, so concurrent callers observe a total order of changes.

use crate::domain::directory::ValidatorDirectory;
use crate::domain::entities::{FallbackPolicy, ValidatorEntry};
use crate::domain::errors::DirectoryError;
use crate::events::DirectoryEvent;
use parking_lot::RwLock;
use shared_types::{address_to_hex, Address, AppId, Bytes32};
use tracing::info;

/// Shared validator directory handle.
pub struct DirectoryService {
    state: RwLock<ValidatorDirectory>,
    events: RwLock<Vec<DirectoryEvent>>,
}

impl DirectoryService {
    /// Create a service around a fresh directory.
    pub fn new(
        owner: Address,
        default_signer: Option<Address>,
        fallback_policy: FallbackPolicy,
    ) -> Self {
        Self {
            state: RwLock::new(ValidatorDirectory::new(
                owner,
                default_signer,
                fallback_policy,
            )),
            events: RwLock::new(Vec::new()),
        }
    }

    /// Register a validator for `app_id`. Owner only.
    pub fn add_validator(
        &self,
        caller: &Address,
        app_id: AppId,
        label: Bytes32,
        address: Address,
    ) -> Result<DirectoryEvent, DirectoryError> {
        let event = self
            .state
            .write()
            .add_validator(caller, app_id, label, address)?;
        info!(
            app_id,
            validator = %address_to_hex(&address),
            "validator added"
        );
        self.events.write().push(event.clone());
        Ok(event)
    }

    /// Remove a validator from `app_id`. Owner only.
    pub fn remove_validator(
        &self,
        caller: &Address,
        app_id: AppId,
        address: Address,
    ) -> Result<DirectoryEvent, DirectoryError> {
        let event = self.state.write().remove_validator(caller, app_id, address)?;
        info!(
            app_id,
            validator = %address_to_hex(&address),
            "validator removed"
        );
        self.events.write().push(event.clone());
        Ok(event)
    }

    /// Replace `old` with `new` in `app_id`'s group. Owner only.
    pub fn update_validator(
        &self,
        caller: &Address,
        app_id: AppId,
        old: Address,
        new: Address,
    ) -> Result<[DirectoryEvent; 2], DirectoryError> {
        let events = self.state.write().update_validator(caller, app_id, old, new)?;
        info!(
            app_id,
            old = %address_to_hex(&old),
            new = %address_to_hex(&new),
            "validator updated"
        );
        self.events.write().extend(events.iter().cloned());
        Ok(events)
    }

    /// Public membership check.
    pub fn is_validator_for_group(&self, app_id: AppId, address: &Address) -> bool {
        self.state.read().is_validator_for_group(app_id, address)
    }

    /// Dedicated group entries for `app_id`.
    pub fn group(&self, app_id: AppId) -> Vec<ValidatorEntry> {
        self.state.read().group(app_id).to_vec()
    }

    /// The configured fallback signer, if any.
    pub fn default_signer(&self) -> Option<Address> {
        self.state.read().default_signer()
    }

    /// Snapshot of all emitted events, oldest first.
    pub fn events(&self) -> Vec<DirectoryEvent> {
        self.events.read().clone()
    }
}
