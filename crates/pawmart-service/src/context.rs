//! Request context carrying the authenticated identity and its claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pawmart_auth::Claims;

/// Context for the current authenticated request.
///
/// Attached by the authentication guard and passed into service methods so
/// that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated identity (credential subject).
    pub identity: String,
    /// All verified claims.
    pub claims: Claims,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context from verified claims.
    pub fn new(claims: Claims) -> Self {
        Self {
            identity: claims.sub.clone(),
            claims,
            request_time: Utc::now(),
        }
    }

    /// Whether this context belongs to `identity`.
    pub fn is(&self, identity: &str) -> bool {
        self.identity == identity
    }
}
