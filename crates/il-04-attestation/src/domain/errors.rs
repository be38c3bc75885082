//! # Attestation Errors

use thiserror::Error;

/// Errors from attestation verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AttestationError {
    /// The signature components are malformed (zero or out-of-range scalar).
    #[error("invalid signature format")]
    InvalidFormat,

    /// Signature has a high S value; the normalized encoding is required.
    #[error("malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28).
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Public key recovery failed for the given digest and signature.
    #[error("failed to recover public key")]
    RecoveryFailed,

    /// The recovered signer is not an authorized validator for the app.
    #[error("invalid signature: signer not authorized for app {app_id}")]
    InvalidSignature { app_id: shared_types::AppId },

    /// The attestation timestamp is older than the app's validity window.
    #[error("signature expired: {age_secs}s old, window {window_secs}s")]
    Expired { age_secs: u64, window_secs: u64 },

    /// The attestation timestamp is too far in the future.
    #[error("signature timestamp is in the future")]
    FromFuture,

    /// Caller does not hold the verifier owner role.
    #[error("caller is not the verifier owner")]
    NotOwner,
}
