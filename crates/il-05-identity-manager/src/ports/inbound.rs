//! # Inbound Port (Driving Port / API)
//!
//! The public entry points of the protocol. `caller` is always the
//! transport-authenticated address submitting the operation.

use crate::domain::entities::BatchEntry;
use crate::domain::errors::ManagerError;
use il_02_binding_store::StoreEvent;
use il_03_claim_registry::ClaimEvent;
use il_04_attestation::EcdsaSignature;
use shared_types::{Address, AppId, ExternalId};

/// Primary identity lifecycle API.
///
/// Implementations must be thread-safe (`Send + Sync`); every call runs to
/// completion or fails with no partial state change.
pub trait IdentityApi: Send + Sync {
    /// Bind `external_id` to the caller under `app_id`.
    ///
    /// For `PRIMARY_APP_ID` the attestation is bypassed entirely: the
    /// external id and signature arguments are ignored and the store
    /// allocates a counter id. Everywhere else the signature is mandatory
    /// and must come from a validator of the app's group.
    fn set_identity(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        timestamp: u64,
        signature: Option<EcdsaSignature>,
    ) -> Result<StoreEvent, ManagerError>;

    /// Bind the caller's self-asserted primary identity.
    fn set_primary_identity(&self, caller: &Address) -> Result<StoreEvent, ManagerError>;

    /// Bind several identities in one atomic batch sharing `timestamp`.
    /// Any single failure aborts the whole batch.
    fn set_multiple_identities(
        &self,
        caller: &Address,
        entries: Vec<BatchEntry>,
        timestamp: u64,
    ) -> Result<Vec<StoreEvent>, ManagerError>;

    /// Transfer the caller's binding under `app_id` to `new_owner`.
    /// No signature: the current owner self-authorizes the transfer.
    fn update_identity(
        &self,
        caller: &Address,
        app_id: AppId,
        new_owner: Address,
    ) -> Result<StoreEvent, ManagerError>;

    /// Contest an existing binding: verify the caller's attestation, then
    /// open a claim that becomes resolvable after probation.
    fn claim_identity(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        timestamp: u64,
        signature: EcdsaSignature,
    ) -> Result<ClaimEvent, ManagerError>;

    /// Withdraw the caller's pending claim within `app_id`.
    fn cancel_active_claim(
        &self,
        caller: &Address,
        app_id: AppId,
    ) -> Result<ClaimEvent, ManagerError>;

    /// Finalize a resolvable claim with a fresh attestation, transferring
    /// ownership of the binding to the caller.
    fn update_claimed_identity(
        &self,
        caller: &Address,
        app_id: AppId,
        external_id: ExternalId,
        timestamp: u64,
        signature: EcdsaSignature,
    ) -> Result<StoreEvent, ManagerError>;
}
