//! # Identity Manager Service
//!
//! The bind/update/claim/cancel/finalize state machine. The service holds
//! its own principal address (the capability the store and the claim
//! registry were wired to trust at deployment) and drives every mutation
//! through it, while user-facing permission checks (claim cancellation)
//! pass the end caller through unchanged.

use crate::domain::entities::BatchEntry;
use crate::domain::errors::ManagerError;
use crate::ports::inbound::IdentityApi;
use crate::ports::outbound::{AttestationGateway, BindingStoreGateway, ClaimGateway};
use il_02_binding_store::{BindRequest, StoreEvent};
use il_03_claim_registry::ClaimEvent;
use il_04_attestation::{Attestation, EcdsaSignature};
use shared_types::{address_to_hex, Address, AppId, ExternalId, PRIMARY_APP_ID};
use std::sync::Arc;
use tracing::info;

/// The protocol's entry surface.
pub struct ManagerService {
    /// This component's principal address; holds the manager capability on
    /// the store and the claim registry.
    address: Address,
    verifier: Arc<dyn AttestationGateway>,
    store: Arc<dyn BindingStoreGateway>,
    claims: Arc<dyn ClaimGateway>,
}

impl ManagerService {
    /// Create a manager operating as `address`.
    pub fn new(
        address: Address,
        verifier: Arc<dyn AttestationGateway>,
        store: Arc<dyn BindingStoreGateway>,
        claims: Arc<dyn ClaimGateway>,
    ) -> Self {
        Self {
            address,
            verifier,
            store,
            claims,
        }
    }

    /// The principal address this manager mutates under.
    pub fn address(&self) -> Address {
        self.address
    }

    fn verify_for_caller(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        timestamp: u64,
        signature: &EcdsaSignature,
    ) -> Result<(), ManagerError> {
        let attestation = Attestation {
            subject: *caller,
            app_id,
            external_id,
            timestamp,
        };
        self.verifier.verify(&attestation, signature)?;
        Ok(())
    }
}

impl IdentityApi for ManagerService {
    fn set_identity(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        timestamp: u64,
        signature: Option<EcdsaSignature>,
    ) -> Result<StoreEvent, ManagerError> {
        // Explicit self-asserted branch: no external proof exists or is
        // checked for the primary identity.
        if app_id == PRIMARY_APP_ID {
            return self.set_primary_identity(caller);
        }

        let signature = signature.ok_or(ManagerError::SignatureRequired { app_id })?;
        self.verify_for_caller(caller, app_id, external_id, timestamp, &signature)?;

        let event = self.store.bind(
            &self.address,
            BindRequest::External {
                app_id,
                external_id,
                owner: *caller,
            },
        )?;
        info!(app_id, caller = %address_to_hex(caller), "identity set");
        Ok(event)
    }

    fn set_primary_identity(&self, caller: &Address) -> Result<StoreEvent, ManagerError> {
        let event = self
            .store
            .bind(&self.address, BindRequest::Primary { owner: *caller })?;
        info!(caller = %address_to_hex(caller), "primary identity set");
        Ok(event)
    }

    fn set_multiple_identities(
        &self,
        caller: &Address,
        entries: Vec<BatchEntry>,
        timestamp: u64,
    ) -> Result<Vec<StoreEvent>, ManagerError> {
        // Phase 1: verify every signed entry against the shared timestamp.
        let mut to_verify = Vec::new();
        for entry in &entries {
            if entry.app_id == PRIMARY_APP_ID {
                continue;
            }
            let signature = entry
                .signature
                .clone()
                .ok_or(ManagerError::SignatureRequired {
                    app_id: entry.app_id,
                })?;
            to_verify.push((
                Attestation {
                    subject: *caller,
                    app_id: entry.app_id,
                    external_id: entry.external_id,
                    timestamp,
                },
                signature,
            ));
        }
        self.verifier.verify_batch(&to_verify)?;

        // Phase 2: apply in order through the store's atomic batch bind,
        // which re-validates everything (including conflicts between
        // entries) before mutating.
        let requests = entries
            .into_iter()
            .map(|entry| {
                if entry.app_id == PRIMARY_APP_ID {
                    BindRequest::Primary { owner: *caller }
                } else {
                    BindRequest::External {
                        app_id: entry.app_id,
                        external_id: entry.external_id,
                        owner: *caller,
                    }
                }
            })
            .collect();
        let events = self.store.bind_many(&self.address, requests)?;
        info!(
            count = events.len(),
            caller = %address_to_hex(caller),
            "multiple identities set"
        );
        Ok(events)
    }

    fn update_identity(
        &self,
        caller: &Address,
        app_id: AppId,
        new_owner: Address,
    ) -> Result<StoreEvent, ManagerError> {
        let external_id = self
            .store
            .id_by_owner(app_id, caller)
            .ok_or(ManagerError::IdentityNotFound { app_id })?;
        let event = self
            .store
            .reassign(&self.address, app_id, external_id, new_owner)?;
        info!(
            app_id,
            from = %address_to_hex(caller),
            to = %address_to_hex(&new_owner),
            "identity updated"
        );
        Ok(event)
    }

    fn claim_identity(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        timestamp: u64,
        signature: EcdsaSignature,
    ) -> Result<ClaimEvent, ManagerError> {
        if app_id == PRIMARY_APP_ID {
            return Err(ManagerError::PrimaryNotClaimable);
        }
        self.verify_for_caller(caller, app_id, external_id, timestamp, &signature)?;

        if self.store.owner_by_id(app_id, external_id).is_none() {
            return Err(ManagerError::ClaimedIdentityNotFound { app_id });
        }
        if self.store.id_by_owner(app_id, caller).is_some() {
            return Err(ManagerError::ClaimerOwnsIdentity { app_id });
        }

        let event = self
            .claims
            .start_claim(&self.address, app_id, external_id, *caller)?;
        info!(app_id, claimant = %address_to_hex(caller), "identity claimed");
        Ok(event)
    }

    fn cancel_active_claim(
        &self,
        caller: &Address,
        app_id: AppId,
    ) -> Result<ClaimEvent, ManagerError> {
        // The claimant's own permission, not the manager capability.
        let event = self.claims.cancel_active_claim(caller, app_id)?;
        Ok(event)
    }

    fn update_claimed_identity(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        timestamp: u64,
        signature: EcdsaSignature,
    ) -> Result<StoreEvent, ManagerError> {
        // A fresh attestation, same rules as at claim time.
        self.verify_for_caller(caller, app_id, external_id, timestamp, &signature)?;

        // The transfer target must still be free before the claim is
        // consumed; resolving first would leave the claim cleared with no
        // ownership change on a doomed reassignment.
        if self.store.id_by_owner(app_id, caller).is_some() {
            return Err(ManagerError::ClaimerOwnsIdentity { app_id });
        }

        self.claims
            .resolve_claim(&self.address, app_id, external_id, caller)?;
        let event = self
            .store
            .reassign(&self.address, app_id, external_id, *caller)?;
        info!(
            app_id,
            new_owner = %address_to_hex(caller),
            "claimed identity transferred"
        );
        Ok(event)
    }
}
