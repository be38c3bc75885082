//! # IdLink Runtime
//!
//! Provisioning and operational tooling around the protocol core:
//!
//! - `config`: deployment configuration (network, signers, apps, timings)
//! - `deploy`: constructs and wires every subsystem, grants the manager
//!   capability, and registers the components under fixed names
//! - `records`: the version-stamped per-network deployment record book
//! - `logging`: tracing subscriber initialization
//!
//! The runtime carries no protocol logic; a deployment is just the ordered
//! application of the subsystems' own constructors and role grants.

pub mod adapters;
pub mod config;
pub mod deploy;
pub mod logging;
pub mod records;

pub use config::{DeploymentConfig, ValidatorSeed};
pub use deploy::{deploy, DeployError, DeployedAddresses, Deployment};
pub use records::{NetworkRecord, RecordBook, RecordError};
