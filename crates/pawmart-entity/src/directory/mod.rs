//! Identity directory entity.

pub mod model;

pub use model::{DirectoryEntry, KEY_FIELD, RESERVED_FIELDS};

/// Collection holding directory documents.
pub const COLLECTION: &str = "users";
