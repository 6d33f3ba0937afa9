//! Runtime settings: the registry's durable form.

use serde::{Deserialize, Serialize};

use crate::matching::Resolution;
use crate::registry::Movie;

/// The persisted settings snapshot.
///
/// Field names match the historical settings file (`tmdbAPIKey` and friends)
/// so existing snapshots load unchanged. Every field has a default: a
/// missing or empty file yields a usable empty state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Tracked movies with their torrent records.
    #[serde(default)]
    pub movies: Vec<Movie>,
    /// Minimum resolution a feed item must meet.
    #[serde(default, rename = "minResolution")]
    pub min_resolution: Resolution,
    /// Default save path stamped onto new torrent records.
    #[serde(default, rename = "savePath")]
    pub save_path: String,
    /// TMDB API key. Empty = metadata lookups disabled.
    #[serde(default, rename = "tmdbAPIKey")]
    pub tmdb_api_key: String,
}

/// Partial settings update, applied field by field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsPatch {
    #[serde(default, rename = "minResolution")]
    pub min_resolution: Option<Resolution>,
    #[serde(default, rename = "savePath")]
    pub save_path: Option<String>,
    #[serde(default, rename = "tmdbAPIKey")]
    pub tmdb_api_key: Option<String>,
}

impl Settings {
    /// Apply a patch in place.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(min_resolution) = patch.min_resolution {
            self.min_resolution = min_resolution;
        }
        if let Some(save_path) = patch.save_path {
            self.save_path = save_path;
        }
        if let Some(tmdb_api_key) = patch.tmdb_api_key {
            self.tmdb_api_key = tmdb_api_key;
        }
    }
}
