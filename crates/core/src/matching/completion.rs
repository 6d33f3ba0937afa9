//! Completion matching: ties a finished download back to its movie.

use std::path::Path;

use serde::Serialize;
use tracing::{error, info};

use crate::registry::MovieRegistry;
use crate::relocate::Relocator;

use super::title::parse_release_title;
use super::types::CompletionRecord;

/// Outcome of handling one download-completion record.
///
/// Every variant is an expected, non-fatal result of an open-world input
/// source; none of them leaves the registry in an inconsistent state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CompletionOutcome {
    /// The raw torrent name could not be parsed into a title.
    Unparsable,
    /// The parsed title matches no tracked movie.
    UntrackedTitle,
    /// A tracked movie was matched and its state updated.
    Matched {
        /// Name of the matched movie.
        movie: String,
        /// Whether a torrent record was flipped to downloaded. False when no
        /// stored release title equals the completion's torrent name.
        marked_downloaded: bool,
        /// Whether the file was copied to the movie's `copyTo` directory.
        relocated: bool,
    },
}

/// Handle one download-completion notification.
///
/// The state transition (torrent `downloaded` flag) is committed before the
/// relocation attempt; a relocation failure is logged and swallowed so it
/// can never revert or block the transition. This function never returns an
/// error past its boundary.
pub async fn handle_completion(
    registry: &mut MovieRegistry,
    record: &CompletionRecord,
    relocator: &dyn Relocator,
) -> CompletionOutcome {
    let Some(parsed) = parse_release_title(&record.name) else {
        info!("Could not parse torrent name '{}', aborting", record.name);
        return CompletionOutcome::Unparsable;
    };

    let Some(movie) = registry.find_mut(&parsed.title) else {
        info!(
            "Completed torrent '{}' (title '{}') is not a tracked movie, aborting",
            record.name, parsed.title
        );
        return CompletionOutcome::UntrackedTitle;
    };

    // Exact match on the originally stored release title, not the parsed one.
    let marked_downloaded = match movie.torrents.iter_mut().find(|t| t.title == record.name) {
        Some(torrent) => {
            torrent.downloaded = true;
            true
        }
        None => false,
    };

    let movie_name = movie.name.clone();
    let copy_to = movie.copy_to.clone();

    let relocated = if copy_to.is_empty() {
        false
    } else {
        relocate(relocator, &record.save_path, &copy_to, &record.name).await
    };

    info!(
        "Completion matched movie '{}' (marked_downloaded={}, relocated={})",
        movie_name, marked_downloaded, relocated
    );

    CompletionOutcome::Matched {
        movie: movie_name,
        marked_downloaded,
        relocated,
    }
}

/// Best-effort copy of the finished file into the movie's target directory.
///
/// Directory creation and copy are one logical operation; a failure in
/// either is logged as an operational error and reported as `false`.
async fn relocate(relocator: &dyn Relocator, save_path: &str, copy_to: &str, name: &str) -> bool {
    let src = Path::new(save_path).join(name);
    let dst = Path::new(copy_to).join(name);

    info!("Copying from {} to {}", save_path, copy_to);

    if let Err(e) = relocator.ensure_dir(Path::new(copy_to)).await {
        error!("Error while preparing {:?} for copy: {}", copy_to, e);
        return false;
    }
    if let Err(e) = relocator.copy_file(&src, &dst).await {
        error!("Error while copying {:?} to {:?}: {}", src, dst, e);
        return false;
    }

    info!("Finished copying {:?} to {:?}", src, dst);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Movie, MovieTorrent};
    use crate::testing::MockRelocator;

    fn record(name: &str) -> CompletionRecord {
        CompletionRecord {
            name: name.to_string(),
            save_path: "/dl".to_string(),
        }
    }

    fn tracked_movie(name: &str, torrent_title: &str, copy_to: &str) -> Movie {
        let mut movie = Movie::new(name);
        movie.copy_to = copy_to.to_string();
        movie.torrents.push(MovieTorrent {
            title: torrent_title.to_string(),
            file_name: "rambo.mkv".to_string(),
            uri: "u1".to_string(),
            torrent_domain: "example.org".to_string(),
            save_path: "/dl".to_string(),
            downloaded: false,
        });
        movie
    }

    #[tokio::test]
    async fn test_unparsable_name_is_a_diagnostic_no_op() {
        // Scenario E.
        let mut registry = MovieRegistry::new();
        registry.add(tracked_movie("Rambo", "Rambo.2023.1080p", ""));
        let relocator = MockRelocator::new();

        let outcome =
            handle_completion(&mut registry, &record("2023.1080p.BluRay"), &relocator).await;

        assert_eq!(outcome, CompletionOutcome::Unparsable);
        assert!(!registry.find("Rambo").unwrap().torrents[0].downloaded);
        assert!(relocator.recorded_copies().await.is_empty());
    }

    #[tokio::test]
    async fn test_untracked_title_is_a_diagnostic_no_op() {
        let mut registry = MovieRegistry::new();
        registry.add(tracked_movie("Rambo", "Rambo.2023.1080p", ""));
        let relocator = MockRelocator::new();

        let outcome =
            handle_completion(&mut registry, &record("Heat.1995.1080p"), &relocator).await;

        assert_eq!(outcome, CompletionOutcome::UntrackedTitle);
        assert!(!registry.find("Rambo").unwrap().torrents[0].downloaded);
    }

    #[tokio::test]
    async fn test_match_flips_downloaded_flag() {
        // Scenario D, no copyTo configured.
        let mut registry = MovieRegistry::new();
        registry.add(tracked_movie("Rambo", "Rambo.2023.1080p", ""));
        let relocator = MockRelocator::new();

        let outcome =
            handle_completion(&mut registry, &record("Rambo.2023.1080p"), &relocator).await;

        assert_eq!(
            outcome,
            CompletionOutcome::Matched {
                movie: "Rambo".to_string(),
                marked_downloaded: true,
                relocated: false,
            }
        );
        assert!(registry.find("Rambo").unwrap().torrents[0].downloaded);
        assert!(relocator.recorded_copies().await.is_empty());
    }

    #[tokio::test]
    async fn test_match_without_stored_title_still_matches_movie() {
        // The movie matches by parsed title but no torrent record carries
        // this exact release title; nothing flips.
        let mut registry = MovieRegistry::new();
        registry.add(tracked_movie("Rambo", "Rambo.2023.720p.WEBRip", ""));
        let relocator = MockRelocator::new();

        let outcome =
            handle_completion(&mut registry, &record("Rambo.2023.1080p"), &relocator).await;

        assert_eq!(
            outcome,
            CompletionOutcome::Matched {
                movie: "Rambo".to_string(),
                marked_downloaded: false,
                relocated: false,
            }
        );
        assert!(!registry.find("Rambo").unwrap().torrents[0].downloaded);
    }

    #[tokio::test]
    async fn test_copy_to_triggers_relocation() {
        let mut registry = MovieRegistry::new();
        registry.add(tracked_movie("Rambo", "Rambo.2023.1080p", "/library/rambo"));
        let relocator = MockRelocator::new();

        let outcome =
            handle_completion(&mut registry, &record("Rambo.2023.1080p"), &relocator).await;

        assert_eq!(
            outcome,
            CompletionOutcome::Matched {
                movie: "Rambo".to_string(),
                marked_downloaded: true,
                relocated: true,
            }
        );

        let dirs = relocator.recorded_dirs().await;
        assert_eq!(dirs, vec![std::path::PathBuf::from("/library/rambo")]);

        let copies = relocator.recorded_copies().await;
        assert_eq!(copies.len(), 1);
        assert_eq!(copies[0].0, std::path::Path::new("/dl/Rambo.2023.1080p"));
        assert_eq!(
            copies[0].1,
            std::path::Path::new("/library/rambo/Rambo.2023.1080p")
        );
    }

    #[tokio::test]
    async fn test_copy_failure_does_not_revert_downloaded() {
        let mut registry = MovieRegistry::new();
        registry.add(tracked_movie("Rambo", "Rambo.2023.1080p", "/library/rambo"));
        let relocator = MockRelocator::new();
        relocator.fail_next_copy().await;

        let outcome =
            handle_completion(&mut registry, &record("Rambo.2023.1080p"), &relocator).await;

        assert_eq!(
            outcome,
            CompletionOutcome::Matched {
                movie: "Rambo".to_string(),
                marked_downloaded: true,
                relocated: false,
            }
        );
        // State monotonicity: the flag was committed before the copy attempt
        // and the failure did not roll it back.
        assert!(registry.find("Rambo").unwrap().torrents[0].downloaded);
    }

    #[tokio::test]
    async fn test_dir_creation_failure_skips_copy() {
        let mut registry = MovieRegistry::new();
        registry.add(tracked_movie("Rambo", "Rambo.2023.1080p", "/library/rambo"));
        let relocator = MockRelocator::new();
        relocator.fail_next_ensure_dir().await;

        let outcome =
            handle_completion(&mut registry, &record("Rambo.2023.1080p"), &relocator).await;

        assert!(matches!(
            outcome,
            CompletionOutcome::Matched {
                relocated: false,
                ..
            }
        ));
        assert!(relocator.recorded_copies().await.is_empty());
        assert!(registry.find("Rambo").unwrap().torrents[0].downloaded);
    }

    #[tokio::test]
    async fn test_matching_is_case_insensitive() {
        let mut registry = MovieRegistry::new();
        registry.add(tracked_movie("RAMBO", "rambo.2023.1080p", ""));
        let relocator = MockRelocator::new();

        let outcome =
            handle_completion(&mut registry, &record("rambo.2023.1080p"), &relocator).await;

        assert!(matches!(outcome, CompletionOutcome::Matched { .. }));
    }
}
