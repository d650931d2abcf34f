//! stevedore-api - HTTP gateway client for Stevedore
//!
//! One async method per backend action over the `/api/v1` contract.
//! Fully materialized records in, typed errors out; no retry, caching,
//! or batching.

pub mod client;
pub mod payload;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use payload::NewContainer;
