//! Tracked movie and torrent record types.
//!
//! These are the durable shapes: they serialize with the settings file's
//! camelCase field names so an existing settings snapshot round-trips.

use serde::{Deserialize, Serialize};

/// A tracked movie the engine watches for in incoming feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Canonical display/search title. Not necessarily normalized.
    pub name: String,
    /// Tracker-domain filter. `"*"` means any tracker.
    #[serde(default = "default_tracker")]
    pub tracker: String,
    /// Destination directory for completed downloads. Empty = no relocation.
    #[serde(default)]
    pub copy_to: String,
    /// Discovered torrents, in discovery order. Never reordered.
    #[serde(default)]
    pub torrents: Vec<MovieTorrent>,
}

fn default_tracker() -> String {
    "*".to_string()
}

impl Movie {
    /// Create a movie with no torrents and default tracker/copy settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracker: default_tracker(),
            copy_to: String::new(),
            torrents: Vec::new(),
        }
    }

    /// Whether a torrent with this uri has already been discovered.
    pub fn has_torrent_uri(&self, uri: &str) -> bool {
        self.torrents.iter().any(|t| t.uri == uri)
    }
}

/// One candidate/acquired release for a tracked movie.
///
/// State machine: created with `downloaded = false` (pending); the sole
/// transition is `pending -> downloaded`, applied by completion matching,
/// and it is terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieTorrent {
    /// Release title as seen in the feed. Used verbatim for completion
    /// matching, never normalized.
    pub title: String,
    /// On-disk file name once known.
    #[serde(default)]
    pub file_name: String,
    /// Unique locator for the torrent. Dedup key within a movie.
    #[serde(default)]
    pub uri: String,
    /// Feed/tracker domain the torrent was discovered on.
    #[serde(default)]
    pub torrent_domain: String,
    /// Directory the torrent client will/did save into.
    #[serde(default)]
    pub save_path: String,
    /// State flag: false = pending, true = downloaded.
    #[serde(default)]
    pub downloaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_defaults() {
        let movie = Movie::new("Rambo");
        assert_eq!(movie.name, "Rambo");
        assert_eq!(movie.tracker, "*");
        assert!(movie.copy_to.is_empty());
        assert!(movie.torrents.is_empty());
    }

    #[test]
    fn test_movie_deserializes_with_missing_fields() {
        let movie: Movie = serde_json::from_str(r#"{"name": "Heat"}"#).unwrap();
        assert_eq!(movie.name, "Heat");
        assert_eq!(movie.tracker, "*");
        assert!(movie.torrents.is_empty());
    }

    #[test]
    fn test_torrent_serializes_camel_case() {
        let torrent = MovieTorrent {
            title: "Rambo.2023.1080p".to_string(),
            file_name: "rambo.mkv".to_string(),
            uri: "magnet:?xt=abc".to_string(),
            torrent_domain: "example.org".to_string(),
            save_path: "/downloads".to_string(),
            downloaded: false,
        };
        let json = serde_json::to_value(&torrent).unwrap();
        assert_eq!(json["fileName"], "rambo.mkv");
        assert_eq!(json["torrentDomain"], "example.org");
        assert_eq!(json["savePath"], "/downloads");
        assert_eq!(json["downloaded"], false);
    }

    #[test]
    fn test_has_torrent_uri() {
        let mut movie = Movie::new("Heat");
        movie.torrents.push(MovieTorrent {
            title: "Heat.1995.1080p".to_string(),
            file_name: String::new(),
            uri: "u1".to_string(),
            torrent_domain: String::new(),
            save_path: String::new(),
            downloaded: false,
        });
        assert!(movie.has_torrent_uri("u1"));
        assert!(!movie.has_torrent_uri("u2"));
    }
}
