//! # Outbound Ports (Driven Ports)
//!
//! The manager's view of its collaborators. Each gateway mirrors the
//! subsystem service it fronts; the adapters module wires the concrete
//! services in, unit tests substitute mocks; in particular, mock
//! attestations keep the state machine testable without real signatures.

use il_02_binding_store::{BindRequest, StoreError, StoreEvent};
use il_03_claim_registry::{Claim, ClaimError, ClaimEvent};
use il_04_attestation::{Attestation, AttestationError, EcdsaSignature, VerifiedAttestation};
use shared_types::{Address, AppId, ExternalId};

/// Attestation verification boundary.
pub trait AttestationGateway: Send + Sync {
    /// Verify one attestation.
    fn verify(
        &self,
        attestation: &Attestation,
        signature: &EcdsaSignature,
    ) -> Result<VerifiedAttestation, AttestationError>;

    /// Verify a batch, all-or-nothing.
    fn verify_batch(
        &self,
        entries: &[(Attestation, EcdsaSignature)],
    ) -> Result<Vec<VerifiedAttestation>, AttestationError>;
}

/// Binding store boundary (manager capability required by the callee).
pub trait BindingStoreGateway: Send + Sync {
    /// Create one binding.
    fn bind(&self, caller: &Address, request: BindRequest) -> Result<StoreEvent, StoreError>;

    /// Create a batch of bindings, all-or-nothing.
    fn bind_many(
        &self,
        caller: &Address,
        requests: Vec<BindRequest>,
    ) -> Result<Vec<StoreEvent>, StoreError>;

    /// Reassign a binding to a new owner.
    fn reassign(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        new_owner: Address,
    ) -> Result<StoreEvent, StoreError>;

    /// Owner of `(app_id, external_id)`, if bound.
    fn owner_by_id(&self, app_id: AppId, external_id: ExternalId) -> Option<Address>;

    /// External id held by `owner` under `app_id`, if any.
    fn id_by_owner(&self, app_id: AppId, owner: &Address) -> Option<ExternalId>;
}

/// Claim registry boundary.
pub trait ClaimGateway: Send + Sync {
    /// Record a claim (manager capability required by the callee).
    fn start_claim(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        claimant: Address,
    ) -> Result<ClaimEvent, ClaimError>;

    /// Cancel the caller's own pending claim within an application.
    fn cancel_active_claim(&self, caller: &Address, app_id: AppId)
        -> Result<ClaimEvent, ClaimError>;

    /// Clear a resolvable claim for `claimant` and return it.
    fn resolve_claim(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        claimant: &Address,
    ) -> Result<Claim, ClaimError>;
}
