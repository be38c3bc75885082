//! # Deployment Record Book
//!
//! Version-stamped record of where the protocol lives per network. A new
//! deployment supersedes the previous one, which is pushed onto the
//! network's history rather than discarded.

use serde::{Deserialize, Serialize};
use shared_types::{address_to_hex, Address};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or persisting the record book.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Filesystem access failed.
    #[error("record io: {0}")]
    Io(#[from] std::io::Error),

    /// The record file is not valid JSON for this schema.
    #[error("record format: {0}")]
    Format(#[from] serde_json::Error),
}

/// A superseded deployment kept for history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupersededRecord {
    /// Registry address of the old deployment (hex).
    pub address: String,
    /// Unix timestamp the old deployment was recorded at.
    pub deployed_at: u64,
}

/// The current deployment on one network, plus its history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRecord {
    /// Registry address of the current deployment (hex).
    pub address: String,
    /// Unix timestamp the deployment was recorded at.
    pub deployed_at: u64,
    /// Older deployments, oldest first.
    #[serde(default)]
    pub previous_versions: Vec<SupersededRecord>,
}

/// All recorded deployments keyed by network identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordBook {
    #[serde(default)]
    entries: BTreeMap<String, NetworkRecord>,
}

impl RecordBook {
    /// An empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a book from a JSON file; a missing file yields an empty book.
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Persist the book as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), RecordError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Record a deployment on `network`, superseding any current entry.
    pub fn record(&mut self, network: &str, registry: &Address, deployed_at: u64) {
        let address = address_to_hex(registry);
        match self.entries.get_mut(network) {
            Some(current) => {
                current.previous_versions.push(SupersededRecord {
                    address: current.address.clone(),
                    deployed_at: current.deployed_at,
                });
                current.address = address;
                current.deployed_at = deployed_at;
            }
            None => {
                self.entries.insert(
                    network.to_owned(),
                    NetworkRecord {
                        address,
                        deployed_at,
                        previous_versions: Vec::new(),
                    },
                );
            }
        }
    }

    /// The current record for `network`, if any.
    pub fn current(&self, network: &str) -> Option<&NetworkRecord> {
        self.entries.get(network)
    }

    /// All recorded network identifiers.
    pub fn networks(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}
