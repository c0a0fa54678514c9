//! Credential issuing.

use axum::Json;
use axum::extract::State;

use pawmart_core::types::Fields;

use crate::dto::response::TokenResponse;
use crate::error::ApiResult;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /getToken
///
/// Signs whatever claims object the caller submits; it must name an identity
/// through `email`, `identity`, or `sub`.
pub async fn issue_token(
    State(state): State<AppState>,
    JsonBody(claims): JsonBody<Fields>,
) -> ApiResult<Json<TokenResponse>> {
    let issued = state.jwt_encoder.issue(claims)?;
    Ok(Json(TokenResponse {
        token: issued.token,
    }))
}
