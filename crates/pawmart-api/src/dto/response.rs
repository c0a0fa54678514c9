//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response to a listing creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListingResponse {
    /// Always `true`.
    pub success: bool,
    /// Id of the new listing.
    #[serde(rename = "listingId")]
    pub listing_id: Uuid,
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always `true`.
    pub success: bool,
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a successful message response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Directory sync response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse<T: Serialize> {
    /// Always `true`.
    pub success: bool,
    /// Sync outcome.
    pub result: T,
}

/// Issued credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Compact JWT.
    pub token: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Store backend name.
    pub store: String,
}
