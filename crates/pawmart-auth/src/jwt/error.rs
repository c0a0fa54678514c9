//! Credential verification failures.

use thiserror::Error;

use pawmart_core::error::AppError;

/// Why a presented credential was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is not a well-formed credential.
    #[error("malformed token: {0}")]
    Malformed(String),
    /// The signature does not match (tampered, or signed with another secret).
    #[error("invalid token signature")]
    InvalidSignature,
    /// The token is past its expiry.
    #[error("token has expired")]
    Expired,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::invalid_credential(format!("Credential rejected: {err}"))
    }
}
