//! Runtime configuration for the registries.
//!
//! ```rust
//! use mocknode_core::config::CoreConfig;
//!
//! let config = CoreConfig::default().with_collection_quota(5);
//! assert_eq!(config.project_quota, 2);
//! assert_eq!(config.collection_quota, 5);
//! ```

use crate::quota::{DEFAULT_COLLECTIONS_PER_PROJECT, DEFAULT_PROJECTS_PER_USER, QuotaPolicy};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`CoreConfig::project_quota`].
pub const PROJECT_QUOTA_ENV: &str = "MOCKNODE_PROJECT_QUOTA";

/// Environment variable overriding [`CoreConfig::collection_quota`].
pub const COLLECTION_QUOTA_ENV: &str = "MOCKNODE_COLLECTION_QUOTA";

/// Quota limits applied to non-upgraded owners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreConfig {
    /// Projects per user
    pub project_quota: u64,
    /// Collections per project
    pub collection_quota: u64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            project_quota: DEFAULT_PROJECTS_PER_USER,
            collection_quota: DEFAULT_COLLECTIONS_PER_PROJECT,
        }
    }
}

impl CoreConfig {
    /// Defaults overridden by environment variables where set.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns per variable name.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            project_quota: read_limit(&lookup, PROJECT_QUOTA_ENV, defaults.project_quota),
            collection_quota: read_limit(
                &lookup,
                COLLECTION_QUOTA_ENV,
                defaults.collection_quota,
            ),
        };

        info!(
            "Quota configuration: {} projects per user, {} collections per project",
            config.project_quota, config.collection_quota
        );
        config
    }

    /// Set the projects-per-user limit.
    pub fn with_project_quota(mut self, limit: u64) -> Self {
        self.project_quota = limit;
        self
    }

    /// Set the collections-per-project limit.
    pub fn with_collection_quota(mut self, limit: u64) -> Self {
        self.collection_quota = limit;
        self
    }

    /// Policy applied when creating projects.
    pub fn project_policy(&self) -> QuotaPolicy {
        QuotaPolicy::new("Project", self.project_quota)
    }

    /// Policy applied when creating collections.
    pub fn collection_policy(&self) -> QuotaPolicy {
        QuotaPolicy::new("Collection", self.collection_quota)
    }
}

fn read_limit<F>(lookup: &F, key: &str, fallback: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(limit) => limit,
            Err(e) => {
                warn!(
                    "Invalid value '{}' for {}: {} (using default {})",
                    raw, key, e, fallback
                );
                fallback
            }
        },
        None => fallback,
    }
}
