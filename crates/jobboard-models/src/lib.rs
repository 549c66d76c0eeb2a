//! Shared data models for the job board backend.
//!
//! This crate provides Serde-serializable types for:
//! - Job postings and their owning buyer
//! - Bids placed against a job
//!
//! Documents carry their MongoDB `_id` and round-trip arbitrary extra
//! fields through a flattened map, while required fields are validated
//! at the API boundary.

pub mod bid;
pub mod buyer;
pub mod job;

// Re-export common types
pub use bid::Bid;
pub use buyer::Buyer;
pub use job::Job;
