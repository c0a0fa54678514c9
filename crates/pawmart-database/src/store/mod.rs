//! [`DocumentStore`](pawmart_core::traits::DocumentStore) implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
