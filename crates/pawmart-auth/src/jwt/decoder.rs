//! JWT token validation.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde_json::Value;

use pawmart_core::config::AuthConfig;
use pawmart_core::error::AppError;

use super::ALGORITHM;
use super::claims::Claims;
use super::error::AuthError;

/// Validates credentials issued by [`JwtEncoder`](super::JwtEncoder).
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Reads header and payload without checking the signature or claims.
    structure: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    ///
    /// Fails with a configuration error when the secret is empty.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret must be set before verifying tokens",
            ));
        }

        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = config.clock_skew_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let mut structure = Validation::new(ALGORITHM);
        structure.insecure_disable_signature_validation();
        structure.validate_exp = false;
        structure.validate_aud = false;
        structure.required_spec_claims.clear();

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            structure,
        })
    }

    /// Verifies the signature, then the expiry, and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::Expired,
                JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidSignature
                }
                _ if self.has_readable_claims(token) => AuthError::InvalidSignature,
                _ => AuthError::Malformed(e.to_string()),
            })
    }

    /// Whether the first two segments are a readable header and payload.
    ///
    /// Anything after the second `.` is treated as the signature, so a damaged
    /// signature (even one that gained a `.`) is told apart from a token that
    /// was never well formed.
    fn has_readable_claims(&self, token: &str) -> bool {
        let mut segments = token.splitn(3, '.');
        let (Some(header), Some(payload), Some(_)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return false;
        };

        let unsigned = format!("{header}.{payload}.");
        decode::<Value>(&unsigned, &self.decoding_key, &self.structure).is_ok()
    }
}
