//! # Attestation Service
//!
//! Wires the domain cryptography to the directory port and the clock.
//! Verification is read-only; the only state here is the owner-gated
//! validity-window configuration.

use crate::domain::codec::{attestation_digest, Attestation};
use crate::domain::ecdsa::recover_address;
use crate::domain::entities::{EcdsaSignature, VerifiedAttestation};
use crate::domain::errors::AttestationError;
use crate::ports::outbound::ValidatorLookup;
use parking_lot::RwLock;
use rayon::prelude::*;
use shared_types::{address_to_hex, Address, AppId, Clock};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Default attestation validity window: one day.
pub const DEFAULT_VALIDITY_SECS: u64 = 86_400;

/// Tolerated clock skew for timestamps from the future.
const MAX_FUTURE_SKEW_SECS: u64 = 10;

struct ValidityWindows {
    default_secs: u64,
    per_app: HashMap<AppId, u64>,
}

/// Shared attestation verifier handle.
pub struct AttestationService {
    owner: Address,
    chain_id: u64,
    windows: RwLock<ValidityWindows>,
    validators: Arc<dyn ValidatorLookup>,
    clock: Arc<dyn Clock>,
}

impl AttestationService {
    /// Create a verifier for one deployment network.
    pub fn new(
        owner: Address,
        chain_id: u64,
        validators: Arc<dyn ValidatorLookup>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            owner,
            chain_id,
            windows: RwLock::new(ValidityWindows {
                default_secs: DEFAULT_VALIDITY_SECS,
                per_app: HashMap::new(),
            }),
            validators,
            clock,
        }
    }

    /// The network this verifier's digests are bound to.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Effective validity window for an application.
    pub fn validity_window(&self, app_id: AppId) -> u64 {
        let windows = self.windows.read();
        windows
            .per_app
            .get(&app_id)
            .copied()
            .unwrap_or(windows.default_secs)
    }

    /// Update the validity window, globally or for one application.
    /// Owner only.
    pub fn update_validity_window(
        &self,
        caller: &Address,
        app_id: Option<AppId>,
        secs: u64,
    ) -> Result<(), AttestationError> {
        if *caller != self.owner {
            return Err(AttestationError::NotOwner);
        }
        let mut windows = self.windows.write();
        match app_id {
            Some(app_id) => {
                windows.per_app.insert(app_id, secs);
            }
            None => windows.default_secs = secs,
        }
        Ok(())
    }

    /// Verify one attestation: recover the signer, check directory
    /// membership, then freshness. Returns the verified tuple; mutates
    /// nothing.
    pub fn verify(
        &self,
        attestation: &Attestation,
        signature: &EcdsaSignature,
    ) -> Result<VerifiedAttestation, AttestationError> {
        let digest = attestation_digest(self.chain_id, attestation);
        let signer = recover_address(&digest, signature)?;

        if !self
            .validators
            .is_validator_for_group(attestation.app_id, &signer)
        {
            return Err(AttestationError::InvalidSignature {
                app_id: attestation.app_id,
            });
        }

        let now = self.clock.now();
        if attestation.timestamp > now + MAX_FUTURE_SKEW_SECS {
            return Err(AttestationError::FromFuture);
        }
        let age_secs = now.saturating_sub(attestation.timestamp);
        let window_secs = self.validity_window(attestation.app_id);
        if age_secs > window_secs {
            return Err(AttestationError::Expired {
                age_secs,
                window_secs,
            });
        }

        debug!(
            app_id = attestation.app_id,
            signer = %address_to_hex(&signer),
            "attestation verified"
        );
        Ok(VerifiedAttestation {
            attestation: attestation.clone(),
            signer,
        })
    }

    /// Verify a batch in parallel, all-or-nothing: the first failure is
    /// returned and the whole batch is considered rejected.
    pub fn verify_batch(
        &self,
        entries: &[(Attestation, EcdsaSignature)],
    ) -> Result<Vec<VerifiedAttestation>, AttestationError> {
        entries
            .par_iter()
            .map(|(attestation, signature)| self.verify(attestation, signature))
            .collect()
    }
}
