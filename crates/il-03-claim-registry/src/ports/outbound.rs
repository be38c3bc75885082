//! # Outbound Ports
//!
//! The claim registry never mutates the binding store; it only needs to
//! know whether a contested binding exists. That read access goes through
//! this port so the registry can be tested against a fixture map.

use shared_types::{Address, AppId, ExternalId};

/// Read-only view of the binding store.
pub trait BindingReader: Send + Sync {
    /// Owner of `(app_id, external_id)`, if bound.
    fn owner_by_id(&self, app_id: AppId, external_id: ExternalId) -> Option<Address>;
}
