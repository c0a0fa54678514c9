//! Listing and directory behaviour settings.

use serde::{Deserialize, Serialize};

/// Listing catalogue settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsConfig {
    /// Number of listings returned by `/listings/recent` when no limit is given.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Upper bound for a caller-supplied recent limit.
    #[serde(default = "default_recent_limit_max")]
    pub recent_limit_max: usize,
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            recent_limit_max: default_recent_limit_max(),
        }
    }
}

impl ListingsConfig {
    /// Clamps a requested limit into `1..=recent_limit_max`.
    pub fn clamp_recent(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.recent_limit)
            .clamp(1, self.recent_limit_max.max(1))
    }
}

/// Identity directory settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DirectoryConfig {
    /// Require a bearer credential on `POST /users` and only allow syncing
    /// the authenticated identity.
    #[serde(default)]
    pub require_authentication: bool,
}

fn default_recent_limit() -> usize {
    6
}

fn default_recent_limit_max() -> usize {
    50
}
