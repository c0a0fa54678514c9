//! Order handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use pawmart_entity::order::Order;

use crate::dto::request::CreateOrderBody;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<CreateOrderBody>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let order = state.order_service.create(&auth, body.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(order))))
}

/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<Order>>>> {
    let orders = state.order_service.list_for(&auth).await?;
    Ok(Json(ApiResponse::ok(orders)))
}
