//! Route definitions for the PawMart HTTP API.
//!
//! Public routes and bearer-protected routes are built separately and merged.
//! The protected router carries the `require_auth` route layer, so the
//! credential is checked before any body is read.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, threading `AppState` through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let protected = protected_routes(state.directory_service.requires_authentication())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let mut public = public_routes();
    if !state.directory_service.requires_authentication() {
        public = public.route("/users", post(handlers::user::sync_user));
    }

    Router::new()
        .merge(public)
        .merge(protected)
        .with_state(state)
}

/// Routes open to anonymous callers.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/getToken", post(handlers::token::issue_token))
        .route("/listings", get(handlers::listing::list_listings))
        .route("/listings/recent", get(handlers::listing::recent_listings))
        .route("/listings/{id}", get(handlers::listing::get_listing))
}

/// Routes that require a bearer credential.
fn protected_routes(directory_requires_auth: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/my-listings", get(handlers::listing::my_listings))
        .route("/listings", post(handlers::listing::create_listing))
        .route(
            "/listings/{id}",
            put(handlers::listing::update_listing).delete(handlers::listing::delete_listing),
        )
        .route(
            "/orders",
            get(handlers::order::list_orders).post(handlers::order::create_order),
        );

    if directory_requires_auth {
        router.route("/users", post(handlers::user::sync_user))
    } else {
        router
    }
}
