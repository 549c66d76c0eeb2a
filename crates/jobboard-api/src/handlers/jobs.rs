//! Job API handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use jobboard_models::Job;
use jobboard_store::{JobSearch, SortDirection};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Largest accepted page size for search.
const MAX_PAGE_SIZE: i64 = 100;

// ============================================================================
// Write-result responses (shared with the bid handlers)
// ============================================================================

#[derive(Serialize)]
pub struct InsertResponse {
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertResponse {
    fn from(result: InsertOneResult) -> Self {
        Self {
            inserted_id: bson_id_to_hex(result.inserted_id),
        }
    }
}

#[derive(Serialize)]
pub struct UpdateResponse {
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

impl From<UpdateResult> for UpdateResponse {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.map(bson_id_to_hex),
        }
    }
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteResponse {
    fn from(result: DeleteResult) -> Self {
        Self {
            deleted_count: result.deleted_count,
        }
    }
}

fn bson_id_to_hex(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

/// Parse a path-supplied document id.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::bad_request(format!("Invalid id: {id}")))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /jobs
pub async fn list_jobs(State(state): State<AppState>) -> ApiResult<Json<Vec<Job>>> {
    let jobs = state.store.jobs().list_all().await?;
    Ok(Json(jobs))
}

/// GET /job/:id
///
/// A missing id answers `200` with a `null` body rather than a 404.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<Job>>> {
    let id = parse_object_id(&id)?;
    let job = state.store.jobs().get(&id).await?;
    Ok(Json(job))
}

/// POST /job
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<Job>,
) -> ApiResult<Json<InsertResponse>> {
    payload
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let result = state.store.jobs().create(&payload).await?;
    Ok(Json(result.into()))
}

/// GET /jobs/:email
///
/// Jobs owned by the given email; the caller must be that owner.
pub async fn list_jobs_by_owner(
    State(state): State<AppState>,
    Path(email): Path<String>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Job>>> {
    user.require_owner(&email)?;

    let jobs = state.store.jobs().list_by_owner(&email).await?;
    Ok(Json(jobs))
}

/// DELETE /job/:id
///
/// Owner-scoped delete: the store filter includes the authenticated
/// email, so someone else's job id deletes nothing.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    user: AuthUser,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_object_id(&id)?;
    let result = state.store.jobs().delete(&id, &user.email).await?;
    info!(%id, deleted = result.deleted_count, "Deleted job");
    Ok(Json(result.into()))
}

/// PUT /job/:id
///
/// Full-document upsert: replaces every field of the matched document,
/// or inserts a new one (with a fresh id) when nothing matches.
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    user: AuthUser,
    Json(payload): Json<Job>,
) -> ApiResult<Json<UpdateResponse>> {
    payload
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let id = parse_object_id(&id)?;
    info!(%id, email = %user.email, "Upserting job");
    let result = state.store.jobs().upsert(&id, &payload).await?;
    Ok(Json(result.into()))
}

// ============================================================================
// Search
// ============================================================================

/// Query parameters for paginated search. `page` and `size` are required.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// 1-based page number.
    pub page: u64,
    /// Page size.
    pub size: i64,
    /// Exact category filter.
    #[serde(default)]
    pub filter: Option<String>,
    /// `asc` sorts deadlines ascending; anything else descending.
    #[serde(default)]
    pub sort: Option<String>,
    /// Case-insensitive substring match on the title.
    #[serde(default)]
    pub search: Option<String>,
}

impl SearchParams {
    fn into_search(self) -> Result<JobSearch, ApiError> {
        if self.page < 1 {
            return Err(ApiError::bad_request("page must be >= 1"));
        }
        if self.size < 1 {
            return Err(ApiError::bad_request("size must be >= 1"));
        }
        if self.size > MAX_PAGE_SIZE {
            return Err(ApiError::bad_request(format!(
                "size must be <= {MAX_PAGE_SIZE}"
            )));
        }

        Ok(JobSearch {
            page: self.page,
            size: self.size,
            category: self.filter.filter(|c| !c.is_empty()),
            sort: SortDirection::from_str_or_default(self.sort.as_deref().unwrap_or_default()),
            search: self.search.unwrap_or_default(),
        })
    }
}

/// GET /all-jobs
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Job>>> {
    let search = params.into_search()?;
    let jobs = state.store.jobs().search(&search).await?;
    Ok(Json(jobs))
}

/// Query parameters for the count endpoint.
#[derive(Debug, Deserialize)]
pub struct CountParams {
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Serialize)]
pub struct CountResponse {
    pub count: u64,
}

/// GET /jobs-count
///
/// Total matching count for the same filter construction as search,
/// ignoring pagination, for client-side page-count computation.
pub async fn count_jobs(
    State(state): State<AppState>,
    Query(params): Query<CountParams>,
) -> ApiResult<Json<CountResponse>> {
    let count = state
        .store
        .jobs()
        .count(
            params.search.as_deref().unwrap_or_default(),
            params.filter.as_deref().filter(|c| !c.is_empty()),
        )
        .await?;
    Ok(Json(CountResponse { count }))
}
