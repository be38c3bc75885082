//! # Validator Directory State
//!
//! Pure group-membership logic. An address appears at most once per group;
//! the zero address is never a member. The optional default signer answers
//! membership queries according to the configured [`FallbackPolicy`].

use super::entities::{FallbackPolicy, ValidatorEntry};
use super::errors::DirectoryError;
use crate::events::DirectoryEvent;
use shared_types::{is_real_address, Address, AppId, Bytes32};
use std::collections::HashMap;

/// Validator group state for all applications.
pub struct ValidatorDirectory {
    /// Directory owner; the only principal allowed to mutate groups.
    owner: Address,
    /// Dedicated signer groups per application.
    groups: HashMap<AppId, Vec<ValidatorEntry>>,
    /// Process-wide fallback signer, configured at creation.
    default_signer: Option<Address>,
    /// Scope of the fallback signer.
    fallback_policy: FallbackPolicy,
}

impl ValidatorDirectory {
    /// Create a directory owned by `owner`, optionally with a default
    /// fallback signer.
    pub fn new(
        owner: Address,
        default_signer: Option<Address>,
        fallback_policy: FallbackPolicy,
    ) -> Self {
        Self {
            owner,
            groups: HashMap::new(),
            default_signer,
            fallback_policy,
        }
    }

    fn require_owner(&self, caller: &Address) -> Result<(), DirectoryError> {
        if *caller != self.owner {
            return Err(DirectoryError::NotOwner);
        }
        Ok(())
    }

    /// Register a new validator for `app_id`.
    pub fn add_validator(
        &mut self,
        caller: &Address,
        app_id: AppId,
        label: Bytes32,
        address: Address,
    ) -> Result<DirectoryEvent, DirectoryError> {
        self.require_owner(caller)?;
        if !is_real_address(&address) {
            return Err(DirectoryError::ZeroAddress);
        }
        let group = self.groups.entry(app_id).or_default();
        if group.iter().any(|entry| entry.address == address) {
            return Err(DirectoryError::AlreadyRegistered { app_id });
        }
        group.push(ValidatorEntry { label, address });
        Ok(DirectoryEvent::ValidatorAdded {
            app_id,
            validator: address,
        })
    }

    /// Remove a validator from `app_id`.
    pub fn remove_validator(
        &mut self,
        caller: &Address,
        app_id: AppId,
        address: Address,
    ) -> Result<DirectoryEvent, DirectoryError> {
        self.require_owner(caller)?;
        let group = self
            .groups
            .get_mut(&app_id)
            .ok_or(DirectoryError::NotRegistered { address })?;
        let position = group
            .iter()
            .position(|entry| entry.address == address)
            .ok_or(DirectoryError::NotRegistered { address })?;
        group.remove(position);
        Ok(DirectoryEvent::ValidatorRemoved {
            app_id,
            validator: address,
        })
    }

    /// Atomically replace `old` with `new` in `app_id`'s group.
    ///
    /// Emits the removal event before the addition event, in that order.
    pub fn update_validator(
        &mut self,
        caller: &Address,
        app_id: AppId,
        old: Address,
        new: Address,
    ) -> Result<[DirectoryEvent; 2], DirectoryError> {
        self.require_owner(caller)?;
        if !is_real_address(&new) {
            return Err(DirectoryError::ZeroAddress);
        }
        if new == old {
            return Err(DirectoryError::NoChange);
        }
        let group = self
            .groups
            .get_mut(&app_id)
            .ok_or(DirectoryError::NotRegistered { address: old })?;
        if group.iter().any(|entry| entry.address == new) {
            return Err(DirectoryError::AlreadyRegistered { app_id });
        }
        let position = group
            .iter()
            .position(|entry| entry.address == old)
            .ok_or(DirectoryError::NotRegistered { address: old })?;
        let label = group[position].label;
        group.remove(position);
        group.push(ValidatorEntry { label, address: new });
        Ok([
            DirectoryEvent::ValidatorRemoved {
                app_id,
                validator: old,
            },
            DirectoryEvent::ValidatorAdded {
                app_id,
                validator: new,
            },
        ])
    }

    /// Membership check: dedicated group members first, then the default
    /// signer per the fallback policy.
    pub fn is_validator_for_group(&self, app_id: AppId, address: &Address) -> bool {
        let group = self.groups.get(&app_id);
        if let Some(group) = group {
            if group.iter().any(|entry| entry.address == *address) {
                return true;
            }
        }
        match (self.default_signer, self.fallback_policy) {
            (Some(fallback), FallbackPolicy::AllGroups) => fallback == *address,
            (Some(fallback), FallbackPolicy::GroupsWithoutValidators) => {
                group.map_or(true, Vec::is_empty) && fallback == *address
            }
            (None, _) => false,
        }
    }

    /// Dedicated group entries for `app_id` (empty if none registered).
    pub fn group(&self, app_id: AppId) -> &[ValidatorEntry] {
        self.groups.get(&app_id).map_or(&[], Vec::as_slice)
    }

    /// The configured fallback signer, if any.
    pub fn default_signer(&self) -> Option<Address> {
        self.default_signer
    }

    /// The directory owner.
    pub fn owner(&self) -> Address {
        self.owner
    }
}
