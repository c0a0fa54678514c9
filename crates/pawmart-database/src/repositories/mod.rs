//! Typed repositories over the document store.

pub mod directory;
pub mod listing;
pub mod order;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use pawmart_core::error::{AppError, ErrorKind};
use pawmart_core::result::AppResult;
use pawmart_core::types::{Document, Fields};

pub use directory::DirectoryRepository;
pub use listing::ListingRepository;
pub use order::OrderRepository;

/// Serializes an entity into a document body.
pub(crate) fn to_fields<T: Serialize>(entity: &T) -> AppResult<Fields> {
    match serde_json::to_value(entity)? {
        Value::Object(fields) => Ok(fields),
        other => Err(AppError::new(
            ErrorKind::Serialization,
            format!("Expected a JSON object, got {other}"),
        )),
    }
}

/// Deserializes a stored document, restoring its `id` from the store key.
pub(crate) fn from_document<T: DeserializeOwned>(document: Document) -> AppResult<T> {
    let mut body = document.body;
    body.insert("id".to_string(), Value::from(document.id.to_string()));
    serde_json::from_value(Value::Object(body)).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Stored document {} is not readable: {e}", document.id),
            e,
        )
    })
}
