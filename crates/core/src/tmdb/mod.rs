//! Metadata lookup against The Movie Database.
//!
//! Consumes only an API key and returns paged listings; no matching logic
//! lives here. The key comes from runtime settings, so the HTTP layer
//! constructs a client per request from the current snapshot.

mod client;
mod types;

pub use client::TmdbClient;
pub use types::{TmdbMovie, TmdbPage};

use thiserror::Error;

/// Errors from the TMDB client.
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("TMDB not configured: {0}")]
    NotConfigured(String),

    #[error("TMDB rate limit exceeded")]
    RateLimitExceeded,

    #[error("TMDB API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse TMDB response: {0}")]
    ParseError(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
