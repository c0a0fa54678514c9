//! `AuthUser` extractor: resolves the bearer credential into a `RequestContext`.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use tracing::warn;

use pawmart_auth::JwtDecoder;
use pawmart_core::error::AppError;
use pawmart_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Verifies the bearer credential in `headers`, if one is present.
///
/// `Ok(None)` means no bearer credential was sent. A credential that fails
/// verification is always an error.
pub fn authenticate(
    headers: &HeaderMap,
    decoder: &JwtDecoder,
) -> Result<Option<RequestContext>, AppError> {
    let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() else {
        return Ok(None);
    };

    let claims = decoder.verify(bearer.token()).map_err(|reason| {
        warn!(reason = %reason, "Rejected bearer credential");
        AppError::from(reason)
    })?;

    Ok(Some(RequestContext::new(claims)))
}

/// Context attached by the auth middleware, or a fresh verification.
fn resolve(parts: &Parts, state: &AppState) -> Result<Option<RequestContext>, AppError> {
    if let Some(ctx) = parts.extensions.get::<RequestContext>() {
        return Ok(Some(ctx.clone()));
    }
    authenticate(&parts.headers, &state.jwt_decoder)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve(parts, state)?
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthenticated("Missing bearer token").into())
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(resolve(parts, state)?.map(AuthUser))
    }
}
