//! API routes.

use axum::middleware;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::bids::{create_bid, list_bid_requests, list_my_bids, update_bid_status};
use crate::handlers::health::{health, liveness};
use crate::handlers::jobs::{
    count_jobs, create_job, delete_job, get_job, list_jobs, list_jobs_by_owner, search_jobs,
    update_job,
};
use crate::handlers::session::{issue_credential, logout};
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
///
/// Gating happens in the handlers via the `AuthUser` extractor, so gated
/// and open routes share the same router.
pub fn create_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .route("/jwt", post(issue_credential))
        .route("/logout", get(logout));

    let job_routes = Router::new()
        .route("/jobs", get(list_jobs))
        .route("/job", post(create_job))
        .route("/job/:id", get(get_job).put(update_job).delete(delete_job))
        .route("/jobs/:email", get(list_jobs_by_owner))
        .route("/all-jobs", get(search_jobs))
        .route("/jobs-count", get(count_jobs));

    let bid_routes = Router::new()
        .route("/bid", post(create_bid))
        .route("/bid/:id", patch(update_bid_status))
        .route("/my-bids/:email", get(list_my_bids))
        .route("/bid-request/:email", get(list_bid_requests));

    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
        .merge(session_routes)
        .merge(job_routes)
        .merge(bid_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
