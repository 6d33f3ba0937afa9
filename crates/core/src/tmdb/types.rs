//! TMDB response types.

use serde::{Deserialize, Serialize};

/// One movie listing entry from TMDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub popularity: f64,
}

/// A page of movie listings.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

fn default_page() -> u32 {
    1
}
