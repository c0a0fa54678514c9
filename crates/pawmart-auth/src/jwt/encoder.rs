//! JWT token creation with a configurable TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use pawmart_core::config::AuthConfig;
use pawmart_core::error::AppError;
use pawmart_core::types::Fields;

use super::ALGORITHM;
use super::claims::{Claims, identity_from};

/// Creates signed, time-bounded credentials.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime in seconds.
    ttl_seconds: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

/// A freshly signed credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The compact JWT.
    pub token: String,
    /// When the token stops verifying.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails with a configuration error when the secret is empty.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret must be set before issuing tokens",
            ));
        }
        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_seconds: i64::try_from(config.token_ttl_seconds).unwrap_or(i64::MAX),
        })
    }

    /// Issues a token for a submitted payload; the identity is taken from it.
    pub fn issue(&self, submitted: Fields) -> Result<IssuedToken, AppError> {
        let identity = identity_from(&submitted)?;
        self.issue_at(&identity, submitted, Utc::now())
    }

    /// Issues a token for `identity` with additional claims, valid from now.
    pub fn issue_for(&self, identity: &str, extra: Fields) -> Result<IssuedToken, AppError> {
        self.issue_at(identity, extra, Utc::now())
    }

    /// Issues a token with an explicit issue time.
    pub fn issue_at(
        &self,
        identity: &str,
        extra: Fields,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let expires_at = Duration::try_seconds(self.ttl_seconds)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| AppError::configuration("auth.token_ttl_seconds is out of range"))?;
        let claims = Claims::new(
            identity,
            extra,
            issued_at.timestamp(),
            expires_at.timestamp(),
        );

        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        debug!(identity, exp = claims.exp, "Issued token");
        Ok(IssuedToken { token, expires_at })
    }
}
