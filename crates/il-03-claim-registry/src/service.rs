//! # Claim Service
//!
//! Thread-safe facade over [`ClaimBook`], wired to the clock and to the
//! binding store's read port. Existence of the contested binding is checked
//! here, under the same write lock as the claim mutation, so the check is
//! valid against the next serialized call and not just the caller's view.

use crate::domain::book::ClaimBook;
use crate::domain::entities::{Claim, ProbationConfig};
use crate::domain::errors::ClaimError;
use crate::events::ClaimEvent;
use crate::ports::outbound::BindingReader;
use parking_lot::RwLock;
use shared_types::{address_to_hex, Address, AppId, Clock, ExternalId};
use std::sync::Arc;
use tracing::info;

/// Shared claim registry handle.
pub struct ClaimService {
    state: RwLock<ClaimBook>,
    bindings: Arc<dyn BindingReader>,
    clock: Arc<dyn Clock>,
    events: RwLock<Vec<ClaimEvent>>,
}

impl ClaimService {
    /// Create a service around an empty claim book.
    pub fn new(
        owner: Address,
        timing: ProbationConfig,
        bindings: Arc<dyn BindingReader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state: RwLock::new(ClaimBook::new(owner, timing)),
            bindings,
            clock,
            events: RwLock::new(Vec::new()),
        }
    }

    /// Grant the manager capability. Owner only.
    pub fn grant_manager(&self, caller: &Address, address: Address) -> Result<(), ClaimError> {
        self.state.write().grant_manager(caller, address)
    }

    /// Revoke the manager capability. Owner only.
    pub fn revoke_manager(&self, caller: &Address, address: Address) -> Result<(), ClaimError> {
        self.state.write().revoke_manager(caller, address)
    }

    /// Record a claim against an existing binding. Manager only.
    pub fn start_claim(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        claimant: Address,
    ) -> Result<ClaimEvent, ClaimError> {
        let mut state = self.state.write();
        if self.bindings.owner_by_id(app_id, external_id).is_none() {
            return Err(ClaimError::BindingNotFound { app_id });
        }
        let event = state.start_claim(caller, app_id, external_id, claimant, self.clock.now())?;
        info!(
            app_id,
            claimant = %address_to_hex(&claimant),
            "claim started"
        );
        self.events.write().push(event.clone());
        Ok(event)
    }

    /// Cancel a claim by binding. Claimant or registry owner.
    pub fn cancel_claim(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
    ) -> Result<ClaimEvent, ClaimError> {
        let event = self.state.write().cancel_claim(caller, app_id, external_id)?;
        info!(app_id, caller = %address_to_hex(caller), "claim canceled");
        self.events.write().push(event.clone());
        Ok(event)
    }

    /// Cancel the caller's own pending claim within `app_id`.
    pub fn cancel_active_claim(
        &self,
        caller: &Address,
        app_id: AppId,
    ) -> Result<ClaimEvent, ClaimError> {
        let event = self.state.write().cancel_active_claim(caller, app_id)?;
        info!(app_id, caller = %address_to_hex(caller), "claim canceled");
        self.events.write().push(event.clone());
        Ok(event)
    }

    /// Clear a resolvable claim for `claimant` and return it so the caller
    /// can perform the ownership transfer. Manager only.
    pub fn resolve_claim(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        claimant: &Address,
    ) -> Result<Claim, ClaimError> {
        let (claim, event) = self.state.write().resolve_claim(
            caller,
            app_id,
            external_id,
            claimant,
            self.clock.now(),
        )?;
        info!(
            app_id,
            claimant = %address_to_hex(claimant),
            "claim resolved"
        );
        self.events.write().push(event);
        Ok(claim)
    }

    /// Update probation and claim-window durations. Owner only.
    pub fn update_probation_times(
        &self,
        caller: &Address,
        app_id: Option<AppId>,
        probation_secs: u64,
        window_secs: u64,
    ) -> Result<(), ClaimError> {
        self.state
            .write()
            .update_probation_times(caller, app_id, probation_secs, window_secs)?;
        info!(?app_id, probation_secs, window_secs, "probation times updated");
        Ok(())
    }

    /// The active claim on `(app_id, external_id)`, if any.
    pub fn active_claim(&self, app_id: AppId, external_id: ExternalId) -> Option<Claim> {
        self.state.read().active_claim(app_id, external_id)
    }

    /// The external id contested by `claimant` within `app_id`, if any.
    pub fn claim_of(&self, app_id: AppId, claimant: &Address) -> Option<ExternalId> {
        self.state.read().claim_of(app_id, claimant)
    }

    /// Effective `(probation, window)` for an application.
    pub fn timing_for(&self, app_id: AppId) -> (u64, u64) {
        self.state.read().timing_for(app_id)
    }

    /// Snapshot of all emitted events, oldest first.
    pub fn events(&self) -> Vec<ClaimEvent> {
        self.events.read().clone()
    }
}
