//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use pawmart_auth::{JwtDecoder, JwtEncoder};
use pawmart_core::config::AppConfig;
use pawmart_core::error::AppError;
use pawmart_core::traits::DocumentStore;
use pawmart_database::repositories::{DirectoryRepository, ListingRepository, OrderRepository};
use pawmart_service::{DirectoryService, ListingService, OrderService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Document store (in-memory or PostgreSQL)
    pub store: Arc<dyn DocumentStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Listing catalogue service
    pub listing_service: Arc<ListingService>,
    /// Order service
    pub order_service: Arc<OrderService>,
    /// Identity directory service
    pub directory_service: Arc<DirectoryService>,
}

impl AppState {
    /// Wires repositories, codec, and services over an opened store.
    ///
    /// Fails with a configuration error when the signing secret is missing.
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>) -> Result<Self, AppError> {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth)?);

        let listing_repo = Arc::new(ListingRepository::new(Arc::clone(&store)));
        let order_repo = Arc::new(OrderRepository::new(Arc::clone(&store)));
        let directory_repo = Arc::new(DirectoryRepository::new(Arc::clone(&store)));

        let listing_service = Arc::new(ListingService::new(
            listing_repo,
            config.listings.clone(),
        ));
        let order_service = Arc::new(OrderService::new(order_repo));
        let directory_service = Arc::new(DirectoryService::new(
            directory_repo,
            config.directory.require_authentication,
        ));

        Ok(Self {
            config: Arc::new(config),
            store,
            jwt_encoder,
            jwt_decoder,
            listing_service,
            order_service,
            directory_service,
        })
    }
}
