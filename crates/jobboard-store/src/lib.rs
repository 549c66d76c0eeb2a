//! MongoDB access layer.
//!
//! This crate provides:
//! - A typed store client with Stable API v1 options and startup ping
//! - Repositories for the `jobs` and `bids` collections
//! - Filter/sort builders for paginated job search
//!
//! Every repository operation is a single driver call; the two historically
//! racy spots (bid dedup, update-by-id) are expressed as atomic conditional
//! writes rather than check-then-act sequences.

pub mod bids;
pub mod client;
pub mod error;
pub mod jobs;
pub mod query;

pub use bids::{BidCreate, BidRepository};
pub use client::{Store, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use jobs::JobRepository;
pub use query::{JobSearch, SortDirection};
