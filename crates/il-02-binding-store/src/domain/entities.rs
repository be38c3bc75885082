//! # Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, AppId, ExternalId};

/// A single binding creation request.
///
/// The primary-identity variant carries no external id: the store allocates
/// the next counter value under the reserved primary application, keeping
/// the per-app bijection intact without an external platform assigning ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindRequest {
    /// Bind an external-platform identifier to `owner`.
    External {
        app_id: AppId,
        external_id: ExternalId,
        owner: Address,
    },
    /// Bind the next self-asserted primary identity to `owner`.
    Primary { owner: Address },
}

impl BindRequest {
    /// The owner address this request would bind.
    pub fn owner(&self) -> Address {
        match self {
            BindRequest::External { owner, .. } | BindRequest::Primary { owner } => *owner,
        }
    }
}
