//! # Component Adapters
//!
//! Wire the concrete subsystem services into the manager's outbound ports.
//! These are thin by construction: the gateways speak the services' own
//! vocabulary, so each method is a direct delegation.

use crate::ports::outbound::{AttestationGateway, BindingStoreGateway, ClaimGateway};
use il_02_binding_store::{BindRequest, StoreError, StoreEvent, StoreService};
use il_03_claim_registry::{Claim, ClaimError, ClaimEvent, ClaimService};
use il_04_attestation::{
    Attestation, AttestationError, AttestationService, EcdsaSignature, VerifiedAttestation,
};
use shared_types::{Address, AppId, ExternalId};

impl AttestationGateway for AttestationService {
    fn verify(
        &self,
        attestation: &Attestation,
        signature: &EcdsaSignature,
    ) -> Result<VerifiedAttestation, AttestationError> {
        AttestationService::verify(self, attestation, signature)
    }

    fn verify_batch(
        &self,
        entries: &[(Attestation, EcdsaSignature)],
    ) -> Result<Vec<VerifiedAttestation>, AttestationError> {
        AttestationService::verify_batch(self, entries)
    }
}

impl BindingStoreGateway for StoreService {
    fn bind(&self, caller: &Address, request: BindRequest) -> Result<StoreEvent, StoreError> {
        StoreService::bind(self, caller, request)
    }

    fn bind_many(
        &self,
        caller: &Address,
        requests: Vec<BindRequest>,
    ) -> Result<Vec<StoreEvent>, StoreError> {
        StoreService::bind_many(self, caller, requests)
    }

    fn reassign(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        new_owner: Address,
    ) -> Result<StoreEvent, StoreError> {
        StoreService::reassign(self, caller, app_id, external_id, new_owner)
    }

    fn owner_by_id(&self, app_id: AppId, external_id: ExternalId) -> Option<Address> {
        StoreService::owner_by_id(self, app_id, external_id)
    }

    fn id_by_owner(&self, app_id: AppId, owner: &Address) -> Option<ExternalId> {
        StoreService::id_by_owner(self, app_id, owner)
    }
}

impl ClaimGateway for ClaimService {
    fn start_claim(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        claimant: Address,
    ) -> Result<ClaimEvent, ClaimError> {
        ClaimService::start_claim(self, caller, app_id, external_id, claimant)
    }

    fn cancel_active_claim(
        &self,
        caller: &Address,
        app_id: AppId,
    ) -> Result<ClaimEvent, ClaimError> {
        ClaimService::cancel_active_claim(self, caller, app_id)
    }

    fn resolve_claim(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        claimant: &Address,
    ) -> Result<Claim, ClaimError> {
        ClaimService::resolve_claim(self, caller, app_id, external_id, claimant)
    }
}
