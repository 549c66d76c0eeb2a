//! Axum HTTP API server.
//!
//! This crate provides:
//! - JWT credential issuing and cookie-based verification
//! - CRUD routes over the jobs and bids collections
//! - CORS, request id, request logging and security header middleware

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
