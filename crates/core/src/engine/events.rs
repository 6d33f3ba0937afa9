//! Engine event and command types.

use tokio::sync::oneshot;

use crate::matching::{CompletionOutcome, CompletionRecord, FeedBatch};
use crate::settings::{Settings, SettingsPatch};

/// Messages consumed by the engine task.
///
/// External reactions (feed poll results, download completions) and the CRUD
/// surface all flow through the same channel, so their handling never
/// interleaves. Each message carries a reply channel; the engine does not
/// care whether the caller is still listening.
#[derive(Debug)]
pub enum EngineEvent {
    /// A batch of pre-parsed feed items arrived.
    FeedBatch {
        batch: FeedBatch,
        reply: oneshot::Sender<usize>,
    },
    /// A download finished.
    DownloadComplete {
        record: CompletionRecord,
        reply: oneshot::Sender<CompletionOutcome>,
    },
    /// Track a new movie.
    AddMovie {
        name: String,
        reply: oneshot::Sender<AddOutcome>,
    },
    /// Stop tracking a movie.
    RemoveMovie {
        name: String,
        reply: oneshot::Sender<RemoveOutcome>,
    },
    /// Read the current settings snapshot.
    Snapshot { reply: oneshot::Sender<Settings> },
    /// Apply a settings patch.
    UpdateSettings {
        patch: SettingsPatch,
        reply: oneshot::Sender<Settings>,
    },
}

/// Result of an add-movie command.
#[derive(Debug)]
pub enum AddOutcome {
    /// The movie is now tracked; carries the updated snapshot.
    Added(Settings),
    /// A movie with the same normalized name is already tracked.
    AlreadyTracked,
}

/// Result of a remove-movie command.
#[derive(Debug)]
pub enum RemoveOutcome {
    /// The movie was removed; carries the updated snapshot.
    Removed(Settings),
    /// No tracked movie has that normalized name.
    NotTracked,
}
