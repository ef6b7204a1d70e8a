//! Async client for the subset of the Notion REST API used after an OAuth
//! authorization: the token owner lookup and workspace search.

pub mod client;
pub mod error;
pub mod models;

pub use client::{DEFAULT_BASE_URL, NotionClient};
pub use error::{NotionError, Result};
pub use models::{SearchResponse, SearchResult, User};
