//! Listing handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use pawmart_core::error::AppError;
use pawmart_entity::listing::{Listing, UpdateListing};

use crate::dto::request::{CreateListingBody, RecentQuery};
use crate::dto::response::{CreateListingResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody, ValidatedJson, parse_uuid};
use crate::state::AppState;

/// GET /listings
pub async fn list_listings(State(state): State<AppState>) -> ApiResult<Json<Vec<Listing>>> {
    Ok(Json(state.listing_service.list_all().await?))
}

/// GET /listings/recent?limit=n
pub async fn recent_listings(
    State(state): State<AppState>,
    query: Result<Query<RecentQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Listing>>> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    Ok(Json(state.listing_service.list_recent(query.limit).await?))
}

/// GET /listings/{id}
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Listing>> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.listing_service.get(id).await?))
}

/// GET /my-listings
pub async fn my_listings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Listing>>> {
    Ok(Json(state.listing_service.list_by_owner(&auth).await?))
}

/// POST /listings
pub async fn create_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<CreateListingBody>,
) -> ApiResult<(StatusCode, Json<CreateListingResponse>)> {
    let listing = state.listing_service.create(&auth, body.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateListingResponse {
            success: true,
            listing_id: listing.id,
        }),
    ))
}

/// PUT /listings/{id}
///
/// The body is validated by the service, after the existence and ownership
/// checks.
pub async fn update_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<UpdateListing>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_uuid(&id)?;
    state.listing_service.update(&auth, id, changes).await?;
    Ok(Json(MessageResponse::ok("Listing updated")))
}

/// DELETE /listings/{id}
pub async fn delete_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_uuid(&id)?;
    state.listing_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::ok("Listing deleted")))
}
