//! # pawmart-database
//!
//! Document store backends and the typed repositories built on them.
//!
//! The in-memory store is the default and needs no external service. The
//! PostgreSQL store keeps every collection in one JSONB `documents` table.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

use std::sync::Arc;

use tracing::info;

use pawmart_core::config::{DatabaseConfig, StoreProvider};
use pawmart_core::result::AppResult;
use pawmart_core::traits::DocumentStore;

pub use store::{MemoryDocumentStore, PgDocumentStore};

/// Opens the configured store, running migrations for PostgreSQL.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match config.provider {
        StoreProvider::Memory => Arc::new(MemoryDocumentStore::new()),
        StoreProvider::Postgres => {
            let pool = connection::connect(config).await?;
            migration::run_migrations(&pool).await?;
            Arc::new(PgDocumentStore::new(pool))
        }
    };

    info!(backend = store.backend(), "Document store ready");
    Ok(store)
}
