//! # Port Adapters
//!
//! Newtype bridges between subsystems that only know each other through
//! trait boundaries: the attestation verifier reads the directory, the
//! claim registry reads the store.

use il_01_validator_directory::DirectoryService;
use il_02_binding_store::StoreService;
use il_03_claim_registry::BindingReader;
use il_04_attestation::ValidatorLookup;
use shared_types::{Address, AppId, ExternalId};
use std::sync::Arc;

/// Directory membership view for the attestation verifier.
pub struct DirectoryLookup(pub Arc<DirectoryService>);

impl ValidatorLookup for DirectoryLookup {
    fn is_validator_for_group(&self, app_id: AppId, address: &Address) -> bool {
        self.0.is_validator_for_group(app_id, address)
    }
}

/// Binding existence view for the claim registry.
pub struct StoreReader(pub Arc<StoreService>);

impl BindingReader for StoreReader {
    fn owner_by_id(&self, app_id: AppId, external_id: ExternalId) -> Option<Address> {
        self.0.owner_by_id(app_id, external_id)
    }
}
