//! Bearer authentication middleware for protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use pawmart_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::auth::authenticate;
use crate::state::AppState;

/// Rejects requests without a valid bearer credential.
///
/// Runs before any body extractor, so an unauthenticated request never reaches
/// the handler. On success the `RequestContext` is stored in the request
/// extensions for `AuthUser`, and copied onto the response for access logging.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx = authenticate(request.headers(), &state.jwt_decoder)?
        .ok_or_else(|| AppError::unauthenticated("Missing bearer token"))?;

    request.extensions_mut().insert(ctx.clone());
    let mut response = next.run(request).await;
    response.extensions_mut().insert(ctx);
    Ok(response)
}
