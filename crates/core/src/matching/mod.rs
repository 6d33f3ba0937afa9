//! Acquisition matching: the engine's filtering, ranking and reconciliation
//! logic.
//!
//! [`feed::match_batch`] decides which feed items are relevant and appends
//! torrent records; [`completion::handle_completion`] ties an opaque
//! finished download back to the movie that requested it and advances its
//! state. Both operate on the registry synchronously within the handling of
//! one event.

mod completion;
mod feed;
mod resolution;
mod title;
mod types;

pub use completion::{handle_completion, CompletionOutcome};
pub use feed::match_batch;
pub use resolution::{Resolution, VALID_RESOLUTIONS};
pub use title::{normalize_title, parse_release_title, ParsedRelease};
pub use types::{CompletionRecord, FeedBatch, FeedItem};
