//! Async HTTP client for the remote game catalog.

pub mod client;
pub mod error;
pub mod types;

pub use client::{CatalogClient, DEFAULT_BASE_URL, fetch_or_empty};
pub use error::FetchError;
pub use types::{Feed, UnknownFeed};
