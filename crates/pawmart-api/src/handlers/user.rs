//! Identity directory handlers.

use axum::Json;
use axum::extract::State;

use pawmart_core::types::Fields;
use pawmart_service::SyncOutcome;

use crate::dto::response::SyncResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// POST /users
pub async fn sync_user(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    JsonBody(payload): JsonBody<Fields>,
) -> ApiResult<Json<SyncResponse<SyncOutcome>>> {
    let result = state
        .directory_service
        .sync(auth.as_ref().map(AuthUser::context), payload)
        .await?;

    Ok(Json(SyncResponse {
        success: true,
        result,
    }))
}
