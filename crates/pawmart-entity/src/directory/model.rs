//! Identity directory entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pawmart_core::types::Fields;

/// Field the directory is keyed on.
pub const KEY_FIELD: &str = "email";

/// Keys managed by the server; never taken from caller attributes.
pub const RESERVED_FIELDS: &[&str] = &["id", "_id", "email", "created_at", "updated_at"];

/// One record per known identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// The identity key.
    pub email: String,
    /// Caller-supplied profile attributes, replaced wholesale on every sync.
    #[serde(flatten)]
    pub attributes: Fields,
    /// First time this identity was synced.
    pub created_at: DateTime<Utc>,
    /// Most recent sync.
    pub updated_at: DateTime<Utc>,
}

impl DirectoryEntry {
    /// Drops server-managed keys from caller attributes.
    pub fn sanitize_attributes(mut attributes: Fields) -> Fields {
        attributes.retain(|key, _| !RESERVED_FIELDS.contains(&key.as_str()));
        attributes
    }
}
