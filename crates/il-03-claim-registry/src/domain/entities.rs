//! # Domain Entities
//!
//! A claim stays pending through a mandatory probation period (the original
//! owner's chance to react), then remains resolvable for the claim window.
//! Outside `[probation, probation + window]` resolution is rejected.

use serde::{Deserialize, Serialize};
use shared_types::{Address, AppId};
use std::collections::HashMap;

/// An active contest for one binding's ownership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The address contesting the binding.
    pub claimant: Address,
    /// Unix timestamp at which the claim was recorded.
    pub started_at: u64,
}

impl Claim {
    /// Create a claim starting now.
    pub fn new(claimant: Address, started_at: u64) -> Self {
        Self {
            claimant,
            started_at,
        }
    }

    /// Seconds elapsed since the claim started (zero for clock skew into
    /// the past).
    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.started_at)
    }

    /// True once the probation period has fully elapsed.
    pub fn probation_elapsed(&self, now: u64, probation_secs: u64) -> bool {
        self.age(now) >= probation_secs
    }

    /// True once the claim window has closed (strictly after the boundary).
    pub fn expired(&self, now: u64, probation_secs: u64, window_secs: u64) -> bool {
        self.age(now) > probation_secs.saturating_add(window_secs)
    }
}

/// Probation and claim-window durations, global defaults with optional
/// per-application overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProbationConfig {
    /// Default probation period in seconds.
    pub default_probation_secs: u64,
    /// Default claim window in seconds.
    pub default_window_secs: u64,
    /// Per-application `(probation, window)` overrides.
    pub per_app: HashMap<AppId, (u64, u64)>,
}

impl ProbationConfig {
    /// Effective `(probation, window)` for an application.
    pub fn for_app(&self, app_id: AppId) -> (u64, u64) {
        self.per_app
            .get(&app_id)
            .copied()
            .unwrap_or((self.default_probation_secs, self.default_window_secs))
    }
}

impl Default for ProbationConfig {
    fn default() -> Self {
        Self {
            default_probation_secs: 7 * 24 * 3600,
            default_window_secs: 30 * 24 * 3600,
            per_app: HashMap::new(),
        }
    }
}
