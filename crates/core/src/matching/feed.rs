//! Feed matching: turns qualifying feed items into torrent records.

use tracing::{debug, info};

use crate::registry::{MovieRegistry, MovieTorrent};

use super::resolution::Resolution;
use super::title::normalize_title;
use super::types::{FeedBatch, FeedItem};

/// Match a feed batch against the registry, appending new torrent records.
///
/// Each stage strictly narrows the candidate set:
/// 1. items without a resolution or with season/episode markers are dropped
///    (episodic content is out of scope for movie tracking);
/// 2. items below the minimum resolution are dropped;
/// 3. items whose normalized title matches no tracked movie are dropped;
/// 4. per movie, items whose link equals an existing torrent uri are dropped.
///
/// Surviving items become pending torrent records on their movie. Re-running
/// the same batch is a no-op thanks to the uri dedup, so delivery of a feed
/// poll result is safe to retry.
///
/// Returns the number of torrent records appended.
pub fn match_batch(
    registry: &mut MovieRegistry,
    batch: &FeedBatch,
    min_resolution: Resolution,
    default_save_path: &str,
) -> usize {
    let candidates: Vec<&FeedItem> = batch
        .items
        .iter()
        .filter(|item| item.season.is_none() && item.episode.is_none())
        .filter(|item| match &item.resolution {
            Some(label) => Resolution::from_label(label).meets(min_resolution),
            None => false,
        })
        .collect();

    debug!(
        "Feed batch from {}: {} items, {} after resolution/episode filtering",
        batch.feed_domain,
        batch.items.len(),
        candidates.len()
    );

    let mut appended = 0;

    for movie in registry.all_mut() {
        let movie_title = normalize_title(&movie.name);
        for item in &candidates {
            if normalize_title(&item.title) != movie_title {
                continue;
            }
            if movie.has_torrent_uri(&item.link) {
                debug!("Skipping known torrent {} for '{}'", item.link, movie.name);
                continue;
            }
            info!(
                "New torrent for '{}' from {}: {}",
                movie.name, batch.feed_domain, item.release
            );
            movie.torrents.push(MovieTorrent {
                title: item.release.clone(),
                file_name: item.file_name.clone(),
                uri: item.link.clone(),
                torrent_domain: batch.feed_domain.clone(),
                save_path: default_save_path.to_string(),
                downloaded: false,
            });
            appended += 1;
        }
    }

    appended
}
