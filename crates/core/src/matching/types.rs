//! Input types for feed and completion matching.

use serde::{Deserialize, Serialize};

/// One candidate release announcement from a syndication source.
///
/// Items arrive pre-parsed; the engine never fetches or parses feeds itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// Parsed movie title.
    pub title: String,
    /// Resolution label, when the feed parser could extract one.
    #[serde(default)]
    pub resolution: Option<String>,
    /// Unique locator for the torrent. Becomes the torrent record's uri.
    pub link: String,
    /// On-disk file name.
    #[serde(default)]
    pub file_name: String,
    /// Full release label as announced (display title, not normalized).
    #[serde(default)]
    pub release: String,
    /// Season marker. Present only on episodic content.
    #[serde(default)]
    pub season: Option<u32>,
    /// Episode marker. Present only on episodic content.
    #[serde(default)]
    pub episode: Option<u32>,
}

/// A batch of feed items from a single syndication source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedBatch {
    /// Domain of the feed the batch came from.
    pub feed_domain: String,
    /// Pre-parsed items.
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

/// Notification that a previously started download has finished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Raw torrent display name, as reported by the torrent client.
    pub name: String,
    /// Directory the client saved into.
    pub save_path: String,
}
