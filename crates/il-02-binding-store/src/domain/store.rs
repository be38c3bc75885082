//! # Binding Ledger State
//!
//! Dual-map storage so both lookup directions are O(1): owner by
//! `(appId, externalId)` and external id by `(appId, owner)`. Every
//! mutation maintains both maps together, which is what makes the per-app
//! bijection invariant checkable in constant time.

use super::entities::BindRequest;
use super::errors::StoreError;
use crate::events::StoreEvent;
use shared_types::{
    is_real_address, Address, AppId, Bytes32, ExternalId, PRIMARY_APP_ID,
};
use std::collections::{HashMap, HashSet};

/// Authoritative binding ledger for all applications.
pub struct BindingStore {
    /// Admin role holder; administers the manager capability and app labels.
    admin: Address,
    /// Principals allowed to mutate bindings.
    managers: HashSet<Address>,
    /// owner by (appId, externalId).
    owner_by_id: HashMap<(AppId, ExternalId), Address>,
    /// externalId by (appId, owner).
    id_by_owner: HashMap<(AppId, Address), ExternalId>,
    /// Registered application labels; appId is the 1-based index.
    apps: Vec<Bytes32>,
    /// Next counter value for self-asserted primary identities.
    next_primary_id: u64,
}

impl BindingStore {
    /// Create an empty store administered by `admin`.
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            managers: HashSet::new(),
            owner_by_id: HashMap::new(),
            id_by_owner: HashMap::new(),
            apps: Vec::new(),
            next_primary_id: 1,
        }
    }

    fn require_admin(&self, caller: &Address) -> Result<(), StoreError> {
        if *caller != self.admin {
            return Err(StoreError::NotAdmin);
        }
        Ok(())
    }

    fn require_manager(&self, caller: &Address) -> Result<(), StoreError> {
        if !self.managers.contains(caller) {
            return Err(StoreError::NotManager);
        }
        Ok(())
    }

    // =========================================================================
    // ROLE ADMINISTRATION
    // =========================================================================

    /// Grant the manager capability. Admin only.
    pub fn grant_manager(&mut self, caller: &Address, address: Address) -> Result<(), StoreError> {
        self.require_admin(caller)?;
        if !is_real_address(&address) {
            return Err(StoreError::ZeroAddress);
        }
        if !self.managers.insert(address) {
            return Err(StoreError::ManagerAlreadyGranted);
        }
        Ok(())
    }

    /// Revoke the manager capability. Admin only.
    pub fn revoke_manager(&mut self, caller: &Address, address: Address) -> Result<(), StoreError> {
        self.require_admin(caller)?;
        if !self.managers.remove(&address) {
            return Err(StoreError::ManagerNotGranted);
        }
        Ok(())
    }

    /// True if `address` holds the manager capability.
    pub fn is_manager(&self, address: &Address) -> bool {
        self.managers.contains(address)
    }

    // =========================================================================
    // APPLICATION REGISTRY
    // =========================================================================

    /// Register an application label, returning its new 1-based app id.
    /// Admin only. The store does not gate bindings on registration; group
    /// authorization is the validator directory's job.
    pub fn add_app(&mut self, caller: &Address, label: Bytes32) -> Result<StoreEvent, StoreError> {
        self.require_admin(caller)?;
        self.apps.push(label);
        Ok(StoreEvent::AppRegistered {
            app_id: self.apps.len() as AppId,
            label,
        })
    }

    /// Label of a registered application.
    pub fn app_label(&self, app_id: AppId) -> Option<Bytes32> {
        if app_id == 0 {
            return None;
        }
        self.apps.get(app_id as usize - 1).copied()
    }

    /// Highest registered app id (0 when none registered).
    pub fn last_app_id(&self) -> AppId {
        self.apps.len() as AppId
    }

    // =========================================================================
    // BINDING MUTATIONS (manager capability)
    // =========================================================================

    /// Create one binding.
    pub fn bind(
        &mut self,
        caller: &Address,
        request: BindRequest,
    ) -> Result<StoreEvent, StoreError> {
        self.require_manager(caller)?;
        self.check_bind(&request, &HashSet::new(), &HashSet::new())?;
        Ok(self.apply_bind(request))
    }

    /// Create a batch of bindings, all-or-nothing.
    ///
    /// The whole batch is validated first, including conflicts between
    /// batch entries, so a failing entry leaves no partial state behind.
    pub fn bind_many(
        &mut self,
        caller: &Address,
        requests: Vec<BindRequest>,
    ) -> Result<Vec<StoreEvent>, StoreError> {
        self.require_manager(caller)?;

        let mut batch_ids: HashSet<(AppId, ExternalId)> = HashSet::new();
        let mut batch_owners: HashSet<(AppId, Address)> = HashSet::new();
        for request in &requests {
            self.check_bind(request, &batch_ids, &batch_owners)?;
            match request {
                BindRequest::External {
                    app_id,
                    external_id,
                    owner,
                } => {
                    batch_ids.insert((*app_id, *external_id));
                    batch_owners.insert((*app_id, *owner));
                }
                BindRequest::Primary { owner } => {
                    batch_owners.insert((PRIMARY_APP_ID, *owner));
                }
            }
        }

        Ok(requests
            .into_iter()
            .map(|request| self.apply_bind(request))
            .collect())
    }

    /// Reassign an existing binding to `new_owner`.
    pub fn reassign(
        &mut self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        new_owner: Address,
    ) -> Result<StoreEvent, StoreError> {
        self.require_manager(caller)?;
        if !is_real_address(&new_owner) {
            return Err(StoreError::ZeroAddress);
        }
        let old_owner = *self
            .owner_by_id
            .get(&(app_id, external_id))
            .ok_or(StoreError::BindingNotFound { app_id })?;
        if self.id_by_owner.contains_key(&(app_id, new_owner)) {
            return Err(StoreError::OwnerAlreadyBound { app_id });
        }

        self.owner_by_id.insert((app_id, external_id), new_owner);
        self.id_by_owner.remove(&(app_id, old_owner));
        self.id_by_owner.insert((app_id, new_owner), external_id);
        Ok(StoreEvent::BindingUpdated {
            app_id,
            external_id,
            owner: new_owner,
        })
    }

    // =========================================================================
    // READ ACCESSORS
    // =========================================================================

    /// Owner of `(app_id, external_id)`, if bound.
    pub fn owner_by_id(&self, app_id: AppId, external_id: ExternalId) -> Option<Address> {
        self.owner_by_id.get(&(app_id, external_id)).copied()
    }

    /// External id held by `owner` under `app_id`, if any.
    pub fn id_by_owner(&self, app_id: AppId, owner: &Address) -> Option<ExternalId> {
        self.id_by_owner.get(&(app_id, *owner)).copied()
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn check_bind(
        &self,
        request: &BindRequest,
        batch_ids: &HashSet<(AppId, ExternalId)>,
        batch_owners: &HashSet<(AppId, Address)>,
    ) -> Result<(), StoreError> {
        let owner = request.owner();
        if !is_real_address(&owner) {
            return Err(StoreError::ZeroAddress);
        }
        match request {
            BindRequest::External {
                app_id,
                external_id,
                ..
            } => {
                if *app_id == PRIMARY_APP_ID {
                    return Err(StoreError::ReservedApp(PRIMARY_APP_ID));
                }
                if external_id.is_zero() {
                    return Err(StoreError::UnsetExternalId);
                }
                if self.id_by_owner.contains_key(&(*app_id, owner))
                    || batch_owners.contains(&(*app_id, owner))
                {
                    return Err(StoreError::OwnerAlreadyBound { app_id: *app_id });
                }
                if self.owner_by_id.contains_key(&(*app_id, *external_id))
                    || batch_ids.contains(&(*app_id, *external_id))
                {
                    return Err(StoreError::IdAlreadyBound { app_id: *app_id });
                }
            }
            BindRequest::Primary { .. } => {
                if self.id_by_owner.contains_key(&(PRIMARY_APP_ID, owner))
                    || batch_owners.contains(&(PRIMARY_APP_ID, owner))
                {
                    return Err(StoreError::OwnerAlreadyBound {
                        app_id: PRIMARY_APP_ID,
                    });
                }
            }
        }
        Ok(())
    }

    /// Apply a pre-validated bind request.
    fn apply_bind(&mut self, request: BindRequest) -> StoreEvent {
        let (app_id, external_id, owner) = match request {
            BindRequest::External {
                app_id,
                external_id,
                owner,
            } => (app_id, external_id, owner),
            BindRequest::Primary { owner } => {
                let external_id = ExternalId::from(self.next_primary_id);
                self.next_primary_id += 1;
                (PRIMARY_APP_ID, external_id, owner)
            }
        };
        self.owner_by_id.insert((app_id, external_id), owner);
        self.id_by_owner.insert((app_id, owner), external_id);
        StoreEvent::BindingCreated {
            app_id,
            external_id,
            owner,
        }
    }
}
