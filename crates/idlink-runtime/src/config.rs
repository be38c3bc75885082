//! # Deployment Configuration

use il_01_validator_directory::FallbackPolicy;
use serde::{Deserialize, Serialize};
use shared_types::{Address, AppId};

/// One validator to seed into the directory at deployment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidatorSeed {
    /// Application the validator signs for.
    pub app_id: AppId,
    /// Human-readable label (at most 32 bytes once encoded).
    pub label: String,
    /// The signer address.
    pub address: Address,
}

/// Everything a deployment needs to provision the protocol on one network.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Network identifier (keys the deployment record book).
    pub network: String,
    /// Chain id bound into every attestation digest.
    pub chain_id: u64,
    /// The deploying principal; becomes admin/owner of every component.
    pub deployer: Address,
    /// Optional fallback signer for the validator directory.
    pub default_validator: Option<Address>,
    /// Scope of the fallback signer.
    pub fallback_policy: FallbackPolicy,
    /// Application labels to register, in app-id order starting at 1.
    pub apps: Vec<String>,
    /// Validators to seed per application.
    pub validators: Vec<ValidatorSeed>,
    /// Override of the global probation period (seconds).
    pub probation_secs: Option<u64>,
    /// Override of the global claim window (seconds).
    pub claim_window_secs: Option<u64>,
    /// Override of the global attestation validity window (seconds).
    pub validity_secs: Option<u64>,
}

impl DeploymentConfig {
    /// A bare local-development configuration: no apps, no validators,
    /// defaults everywhere.
    pub fn local(deployer: Address) -> Self {
        Self {
            network: "localhost".to_owned(),
            chain_id: 0,
            deployer,
            default_validator: None,
            fallback_policy: FallbackPolicy::default(),
            apps: Vec::new(),
            validators: Vec::new(),
            probation_secs: None,
            claim_window_secs: None,
            validity_secs: None,
        }
    }
}
