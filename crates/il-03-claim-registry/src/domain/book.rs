//! # Claim Book
//!
//! Pure claim bookkeeping. Time enters every rule as an explicit `now`
//! parameter; the service layer supplies it from the clock port. The book
//! maintains a reverse index so a claimant's single active claim per
//! application can be found without scanning.

use super::entities::{Claim, ProbationConfig};
use super::errors::ClaimError;
use crate::events::ClaimEvent;
use shared_types::{is_real_address, Address, AppId, ExternalId};
use std::collections::{HashMap, HashSet};

/// Claim state for all bindings.
pub struct ClaimBook {
    /// Registry owner; configures timings and may cancel any claim.
    owner: Address,
    /// Principals allowed to start and resolve claims.
    managers: HashSet<Address>,
    /// Active claims by contested binding.
    claims: HashMap<(AppId, ExternalId), Claim>,
    /// Reverse index: a claimant's active claim within an application.
    by_claimant: HashMap<(AppId, Address), ExternalId>,
    /// Probation and claim-window configuration.
    timing: ProbationConfig,
}

impl ClaimBook {
    /// Create an empty book owned by `owner`.
    pub fn new(owner: Address, timing: ProbationConfig) -> Self {
        Self {
            owner,
            managers: HashSet::new(),
            claims: HashMap::new(),
            by_claimant: HashMap::new(),
            timing,
        }
    }

    fn require_owner(&self, caller: &Address) -> Result<(), ClaimError> {
        if *caller != self.owner {
            return Err(ClaimError::NotOwner);
        }
        Ok(())
    }

    fn require_manager(&self, caller: &Address) -> Result<(), ClaimError> {
        if !self.managers.contains(caller) {
            return Err(ClaimError::NotManager);
        }
        Ok(())
    }

    // =========================================================================
    // ROLE ADMINISTRATION
    // =========================================================================

    /// Grant the manager capability. Owner only.
    pub fn grant_manager(&mut self, caller: &Address, address: Address) -> Result<(), ClaimError> {
        self.require_owner(caller)?;
        if !is_real_address(&address) {
            return Err(ClaimError::ZeroAddress);
        }
        if !self.managers.insert(address) {
            return Err(ClaimError::ManagerAlreadyGranted);
        }
        Ok(())
    }

    /// Revoke the manager capability. Owner only.
    pub fn revoke_manager(&mut self, caller: &Address, address: Address) -> Result<(), ClaimError> {
        self.require_owner(caller)?;
        if !self.managers.remove(&address) {
            return Err(ClaimError::ManagerNotGranted);
        }
        Ok(())
    }

    // =========================================================================
    // CLAIM LIFECYCLE
    // =========================================================================

    /// Record a new claim. Manager only; the caller has already checked
    /// that the contested binding exists.
    pub fn start_claim(
        &mut self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        claimant: Address,
        now: u64,
    ) -> Result<ClaimEvent, ClaimError> {
        self.require_manager(caller)?;
        if !is_real_address(&claimant) {
            return Err(ClaimError::ZeroAddress);
        }
        if self.claims.contains_key(&(app_id, external_id)) {
            return Err(ClaimError::ClaimPending);
        }
        if self.by_claimant.contains_key(&(app_id, claimant)) {
            return Err(ClaimError::ClaimantBusy { app_id });
        }
        self.claims
            .insert((app_id, external_id), Claim::new(claimant, now));
        self.by_claimant.insert((app_id, claimant), external_id);
        Ok(ClaimEvent::ClaimStarted {
            app_id,
            external_id,
            claimant,
        })
    }

    /// Cancel an active claim. Permitted for the recorded claimant or the
    /// registry owner (administrative override). No ownership change.
    pub fn cancel_claim(
        &mut self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
    ) -> Result<ClaimEvent, ClaimError> {
        let claim = self
            .claims
            .get(&(app_id, external_id))
            .ok_or(ClaimError::NoActiveClaim)?;
        if *caller != claim.claimant && *caller != self.owner {
            return Err(ClaimError::NotClaimant);
        }
        let claimant = claim.claimant;
        self.claims.remove(&(app_id, external_id));
        self.by_claimant.remove(&(app_id, claimant));
        Ok(ClaimEvent::ClaimCanceled {
            app_id,
            external_id,
            claimant,
        })
    }

    /// Cancel the caller's own pending claim within `app_id`, resolving the
    /// contested external id from the reverse index.
    pub fn cancel_active_claim(
        &mut self,
        caller: &Address,
        app_id: AppId,
    ) -> Result<ClaimEvent, ClaimError> {
        let external_id = *self
            .by_claimant
            .get(&(app_id, *caller))
            .ok_or(ClaimError::NoActiveClaim)?;
        self.cancel_claim(caller, app_id, external_id)
    }

    /// Clear a resolvable claim and hand it back for the ownership
    /// transfer. Manager only. Fails before probation elapses and after the
    /// claim window closes; the success range is inclusive on both ends.
    pub fn resolve_claim(
        &mut self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        claimant: &Address,
        now: u64,
    ) -> Result<(Claim, ClaimEvent), ClaimError> {
        self.require_manager(caller)?;
        let claim = self
            .claims
            .get(&(app_id, external_id))
            .ok_or(ClaimError::NoActiveClaim)?;
        if claim.claimant != *claimant {
            return Err(ClaimError::NotClaimant);
        }
        let (probation_secs, window_secs) = self.timing.for_app(app_id);
        if !claim.probation_elapsed(now, probation_secs) {
            return Err(ClaimError::ProbationNotElapsed {
                remaining_secs: probation_secs - claim.age(now),
            });
        }
        if claim.expired(now, probation_secs, window_secs) {
            return Err(ClaimError::ClaimExpired);
        }
        let claim = self
            .claims
            .remove(&(app_id, external_id))
            .ok_or(ClaimError::NoActiveClaim)?;
        self.by_claimant.remove(&(app_id, claim.claimant));
        Ok((
            claim.clone(),
            ClaimEvent::ClaimResolved {
                app_id,
                external_id,
                claimant: claim.claimant,
            },
        ))
    }

    // =========================================================================
    // CONFIGURATION & READS
    // =========================================================================

    /// Update probation and claim-window durations, globally or for one
    /// application. Owner only.
    pub fn update_probation_times(
        &mut self,
        caller: &Address,
        app_id: Option<AppId>,
        probation_secs: u64,
        window_secs: u64,
    ) -> Result<(), ClaimError> {
        self.require_owner(caller)?;
        match app_id {
            Some(app_id) => {
                self.timing
                    .per_app
                    .insert(app_id, (probation_secs, window_secs));
            }
            None => {
                self.timing.default_probation_secs = probation_secs;
                self.timing.default_window_secs = window_secs;
            }
        }
        Ok(())
    }

    /// The active claim on `(app_id, external_id)`, if any.
    pub fn active_claim(&self, app_id: AppId, external_id: ExternalId) -> Option<Claim> {
        self.claims.get(&(app_id, external_id)).cloned()
    }

    /// The external id contested by `claimant` within `app_id`, if any.
    pub fn claim_of(&self, app_id: AppId, claimant: &Address) -> Option<ExternalId> {
        self.by_claimant.get(&(app_id, *claimant)).copied()
    }

    /// Effective `(probation, window)` for an application.
    pub fn timing_for(&self, app_id: AppId) -> (u64, u64) {
        self.timing.for_app(app_id)
    }
}
