//! # Domain Entities

use il_04_attestation::EcdsaSignature;
use serde::{Deserialize, Serialize};
use shared_types::{AppId, ExternalId, PRIMARY_APP_ID};

/// One element of a multi-identity bind, all sharing the batch timestamp.
///
/// A `PRIMARY_APP_ID` entry is the self-asserted bypass case: its external
/// id and signature are ignored, matching the single-identity path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Target application.
    pub app_id: AppId,
    /// External identifier to bind (ignored for the primary app).
    pub external_id: ExternalId,
    /// Validator signature; required unless `app_id` is the primary app.
    pub signature: Option<EcdsaSignature>,
}

impl BatchEntry {
    /// A signed external-platform entry.
    pub fn signed(app_id: AppId, external_id: ExternalId, signature: EcdsaSignature) -> Self {
        Self {
            app_id,
            external_id,
            signature: Some(signature),
        }
    }

    /// A primary-identity entry (no proof needed).
    pub fn primary() -> Self {
        Self {
            app_id: PRIMARY_APP_ID,
            external_id: ExternalId::zero(),
            signature: None,
        }
    }
}
