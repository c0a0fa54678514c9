//! JWT claims structure carried by every credential.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use pawmart_core::error::AppError;
use pawmart_core::types::Fields;

/// Claim names set by the encoder; callers cannot supply them.
pub const REGISTERED_CLAIMS: &[&str] = &["sub", "iat", "exp"];

/// Submitted keys that may name the identity, in order of preference.
const IDENTITY_KEYS: &[&str] = &["email", "identity", "sub"];

/// JWT claims payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the identity (an email address).
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Any additional claims the caller submitted when requesting the token.
    #[serde(flatten)]
    pub extra: Fields,
}

impl Claims {
    /// Builds claims for `identity`, dropping registered names from `extra`.
    pub fn new(identity: impl Into<String>, mut extra: Fields, iat: i64, exp: i64) -> Self {
        extra.retain(|key, _| !REGISTERED_CLAIMS.contains(&key.as_str()));
        Self {
            sub: identity.into(),
            iat,
            exp,
            extra,
        }
    }

    /// Returns the authenticated identity.
    pub fn identity(&self) -> &str {
        &self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }

    /// Looks up an additional claim.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Extracts the identity from a token request payload.
///
/// Looks at `email`, then `identity`, then `sub`; the first non-empty string
/// wins.
pub fn identity_from(submitted: &Fields) -> Result<String, AppError> {
    IDENTITY_KEYS
        .iter()
        .filter_map(|key| submitted.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::validation("An identity (email) is required to issue a token"))
}
