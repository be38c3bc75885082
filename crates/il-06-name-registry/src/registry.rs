//! # Name Registry
//!
//! A flat `Bytes32 -> Address` map with owner-gated writes. Overwrites are
//! allowed: re-deployments re-point the fixed names at fresh components.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared_types::{address_to_hex, is_real_address, Address, Bytes32};
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

/// Errors from registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller does not hold the registry owner role.
    #[error("caller is not the registry owner")]
    NotOwner,

    /// A registered address must not be the zero address.
    #[error("address can not be the zero address")]
    ZeroAddress,
}

/// Emitted whenever a name is (re)registered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEvent {
    /// The registered name.
    pub name: Bytes32,
    /// The address it now resolves to.
    pub address: Address,
}

/// Shared name registry handle.
pub struct NameRegistry {
    owner: Address,
    entries: RwLock<HashMap<Bytes32, Address>>,
    events: RwLock<Vec<RegistryEvent>>,
}

impl NameRegistry {
    /// Create an empty registry owned by `owner`.
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            entries: RwLock::new(HashMap::new()),
            events: RwLock::new(Vec::new()),
        }
    }

    /// Point `name` at `address`. Owner only; overwrite allowed.
    pub fn set_data(
        &self,
        caller: &Address,
        name: Bytes32,
        address: Address,
    ) -> Result<RegistryEvent, RegistryError> {
        if *caller != self.owner {
            return Err(RegistryError::NotOwner);
        }
        if !is_real_address(&address) {
            return Err(RegistryError::ZeroAddress);
        }
        self.entries.write().insert(name, address);
        info!(address = %address_to_hex(&address), "name registered");
        let event = RegistryEvent { name, address };
        self.events.write().push(event.clone());
        Ok(event)
    }

    /// Resolve a name.
    pub fn get(&self, name: &Bytes32) -> Option<Address> {
        self.entries.read().get(name).copied()
    }

    /// All registered names.
    pub fn names(&self) -> Vec<Bytes32> {
        self.entries.read().keys().copied().collect()
    }

    /// Snapshot of all emitted events, oldest first.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.read().clone()
    }
}
