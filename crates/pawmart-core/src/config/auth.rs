//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Credential signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Required; startup fails when empty.
    #[serde(default)]
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Leeway applied to the expiry check, in seconds.
    #[serde(default)]
    pub clock_skew_seconds: u64,
}

impl AuthConfig {
    /// Creates an auth config with the given secret and default lifetimes.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_seconds: default_token_ttl(),
            clock_skew_seconds: 0,
        }
    }
}

fn default_token_ttl() -> u64 {
    3600
}
