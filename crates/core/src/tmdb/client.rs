//! TMDB (The Movie Database) API client.
//!
//! TMDB requires an API key for access.
//! Rate limits are generous (around 40 requests per second).

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::types::{TmdbMovie, TmdbPage};
use super::TmdbError;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(api_key: impl Into<String>) -> Result<Self, TmdbError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(TmdbError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        })
    }

    /// Create a client against a custom base URL (useful for testing).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, TmdbError> {
        let mut client = Self::new(api_key)?;
        client.base_url = base_url.into();
        Ok(client)
    }

    /// Upcoming movie listings, aggregated across all pages.
    pub async fn get_upcoming(&self) -> Result<Vec<TmdbMovie>, TmdbError> {
        let mut results = Vec::new();
        let mut page = 1;

        loop {
            let body = self.fetch_page("movie/upcoming", page).await?;
            let total_pages = body.total_pages;
            results.extend(body.results);

            if page >= total_pages {
                break;
            }
            page += 1;
        }

        debug!("TMDB upcoming: {} movies over {} pages", results.len(), page);
        Ok(results)
    }

    /// Popular movie listings (first page).
    pub async fn get_popular(&self) -> Result<Vec<TmdbMovie>, TmdbError> {
        let body = self.fetch_page("movie/popular", 1).await?;
        debug!("TMDB popular: {} movies", body.results.len());
        Ok(body.results)
    }

    async fn fetch_page(&self, endpoint: &str, page: u32) -> Result<TmdbPage, TmdbError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        debug!("TMDB request: {} page={}", endpoint, page);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
                ("region", "US"),
                ("page", &page.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(TmdbError::NotConfigured("Invalid TMDB API key".to_string()));
        }
        if status == 429 {
            return Err(TmdbError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TmdbError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        response.json().await.map_err(|e| {
            TmdbError::ParseError(format!("Failed to parse {} response: {}", endpoint, e))
        })
    }
}
