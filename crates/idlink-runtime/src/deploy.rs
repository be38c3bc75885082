//! # Deployment
//!
//! Constructs the subsystems in dependency order, wires the trait
//! boundaries, grants the manager capability, seeds apps and validator
//! groups, and registers every component in the name registry under its
//! fixed key.

use crate::adapters::{DirectoryLookup, StoreReader};
use crate::config::DeploymentConfig;
use il_01_validator_directory::{DirectoryError, DirectoryService};
use il_02_binding_store::{StoreError, StoreService};
use il_03_claim_registry::{ClaimError, ClaimService, ProbationConfig};
use il_04_attestation::{keccak256, AttestationError, AttestationService};
use il_05_identity_manager::ManagerService;
use il_06_name_registry::{NameRegistry, RegistryError};
use serde::{Deserialize, Serialize};
use shared_types::{encoding, Address, Clock, EncodingError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Fixed name-registry keys, one per deployed component.
pub const COMPONENT_NAMES: [&str; 6] = [
    "ValidatorDirectory",
    "BindingStore",
    "ClaimRegistry",
    "AttestationVerifier",
    "IdentityManager",
    "NameRegistry",
];

/// Errors from deployment wiring.
#[derive(Debug, Error)]
pub enum DeployError {
    /// Validator directory seeding failed.
    #[error("directory: {0}")]
    Directory(#[from] DirectoryError),

    /// Store provisioning failed.
    #[error("store: {0}")]
    Store(#[from] StoreError),

    /// Claim registry provisioning failed.
    #[error("claims: {0}")]
    Claim(#[from] ClaimError),

    /// Verifier configuration failed.
    #[error("verifier: {0}")]
    Attestation(#[from] AttestationError),

    /// Name registration failed.
    #[error("registry: {0}")]
    Registry(#[from] RegistryError),

    /// A configured label does not fit the fixed width.
    #[error("label: {0}")]
    Label(#[from] EncodingError),
}

/// The deterministic principal addresses of one deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedAddresses {
    pub directory: Address,
    pub store: Address,
    pub claims: Address,
    pub verifier: Address,
    pub manager: Address,
    pub registry: Address,
}

/// A fully wired protocol instance.
pub struct Deployment {
    pub directory: Arc<DirectoryService>,
    pub store: Arc<StoreService>,
    pub claims: Arc<ClaimService>,
    pub verifier: Arc<AttestationService>,
    pub manager: Arc<ManagerService>,
    pub registry: Arc<NameRegistry>,
    pub addresses: DeployedAddresses,
}

/// Derive a component's principal address: last 20 bytes of a keccak digest
/// over the deployer, the network, and the component name. Stable across
/// re-runs of the same configuration.
pub fn component_address(deployer: &Address, network: &str, name: &str) -> Address {
    let mut preimage = Vec::with_capacity(16 + 20 + network.len() + name.len());
    preimage.extend_from_slice(b"idlink/component");
    preimage.extend_from_slice(deployer);
    preimage.extend_from_slice(network.as_bytes());
    preimage.extend_from_slice(name.as_bytes());
    let digest = keccak256(&preimage);
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    address
}

/// Provision and wire the whole protocol per `config`.
pub fn deploy(config: &DeploymentConfig, clock: Arc<dyn Clock>) -> Result<Deployment, DeployError> {
    let deployer = config.deployer;
    let addresses = DeployedAddresses {
        directory: component_address(&deployer, &config.network, COMPONENT_NAMES[0]),
        store: component_address(&deployer, &config.network, COMPONENT_NAMES[1]),
        claims: component_address(&deployer, &config.network, COMPONENT_NAMES[2]),
        verifier: component_address(&deployer, &config.network, COMPONENT_NAMES[3]),
        manager: component_address(&deployer, &config.network, COMPONENT_NAMES[4]),
        registry: component_address(&deployer, &config.network, COMPONENT_NAMES[5]),
    };

    // Store, then its dependents, leaf-first.
    let store = Arc::new(StoreService::new(deployer));
    for label in &config.apps {
        store.add_app(&deployer, encoding::str_to_bytes32(label)?)?;
    }

    let mut timing = ProbationConfig::default();
    if let Some(probation_secs) = config.probation_secs {
        timing.default_probation_secs = probation_secs;
    }
    if let Some(window_secs) = config.claim_window_secs {
        timing.default_window_secs = window_secs;
    }
    let claims = Arc::new(ClaimService::new(
        deployer,
        timing,
        Arc::new(StoreReader(store.clone())),
        clock.clone(),
    ));

    let directory = Arc::new(DirectoryService::new(
        deployer,
        config.default_validator,
        config.fallback_policy,
    ));
    for seed in &config.validators {
        directory.add_validator(
            &deployer,
            seed.app_id,
            encoding::str_to_bytes32(&seed.label)?,
            seed.address,
        )?;
    }

    let verifier = Arc::new(AttestationService::new(
        deployer,
        config.chain_id,
        Arc::new(DirectoryLookup(directory.clone())),
        clock,
    ));
    if let Some(validity_secs) = config.validity_secs {
        verifier.update_validity_window(&deployer, None, validity_secs)?;
    }

    let manager = Arc::new(ManagerService::new(
        addresses.manager,
        verifier.clone(),
        store.clone(),
        claims.clone(),
    ));

    // The capability grants that let the manager mutate store and claims.
    store.grant_manager(&deployer, addresses.manager)?;
    claims.grant_manager(&deployer, addresses.manager)?;

    // Service discovery under the fixed keys.
    let registry = Arc::new(NameRegistry::new(deployer));
    let registered = [
        (COMPONENT_NAMES[0], addresses.directory),
        (COMPONENT_NAMES[1], addresses.store),
        (COMPONENT_NAMES[2], addresses.claims),
        (COMPONENT_NAMES[3], addresses.verifier),
        (COMPONENT_NAMES[4], addresses.manager),
        (COMPONENT_NAMES[5], addresses.registry),
    ];
    for (name, address) in registered {
        registry.set_data(&deployer, encoding::str_to_bytes32(name)?, address)?;
    }

    info!(
        network = %config.network,
        chain_id = config.chain_id,
        apps = config.apps.len(),
        validators = config.validators.len(),
        "deployment complete"
    );

    Ok(Deployment {
        directory,
        store,
        claims,
        verifier,
        manager,
        registry,
        addresses,
    })
}
