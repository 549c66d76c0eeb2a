//! Bid API handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use jobboard_models::Bid;
use jobboard_store::BidCreate;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::handlers::jobs::{parse_object_id, InsertResponse, UpdateResponse};
use crate::state::AppState;

/// POST /bid
///
/// At most one bid per `(email, jobId)` pair; a duplicate answers 400
/// without touching the stored bid.
pub async fn create_bid(
    State(state): State<AppState>,
    Json(payload): Json<Bid>,
) -> ApiResult<Json<InsertResponse>> {
    payload
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    match state.store.bids().create(&payload).await? {
        BidCreate::Created(id) => Ok(Json(InsertResponse {
            inserted_id: id.to_hex(),
        })),
        BidCreate::Duplicate => Err(ApiError::DuplicateBid),
    }
}

/// GET /my-bids/:email
///
/// Bids placed by the given email; the caller must be that bidder.
pub async fn list_my_bids(
    State(state): State<AppState>,
    Path(email): Path<String>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Bid>>> {
    user.require_owner(&email)?;

    let bids = state.store.bids().list_by_bidder(&email).await?;
    Ok(Json(bids))
}

/// GET /bid-request/:email
///
/// Bids on jobs owned by the given email; the caller must be that owner.
pub async fn list_bid_requests(
    State(state): State<AppState>,
    Path(email): Path<String>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Bid>>> {
    user.require_owner(&email)?;

    let bids = state.store.bids().list_by_job_owner(&email).await?;
    Ok(Json(bids))
}

/// Status fields merged into the bid.
#[derive(Debug, Deserialize, Validate)]
pub struct BidStatusUpdate {
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: String,
}

/// PATCH /bid/:id
///
/// Partial update of the bid's status. An unmatched id is a success
/// with `modified_count: 0`.
pub async fn update_bid_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    user: AuthUser,
    Json(payload): Json<BidStatusUpdate>,
) -> ApiResult<Json<UpdateResponse>> {
    payload
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let id = parse_object_id(&id)?;
    info!(%id, status = %payload.status, email = %user.email, "Updating bid status");
    let result = state
        .store
        .bids()
        .update_status(&id, &payload.status)
        .await?;
    Ok(Json(result.into()))
}
