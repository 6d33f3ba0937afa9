//! Handle for sending events to the engine task.

use tokio::sync::{mpsc, oneshot};

use crate::matching::{CompletionOutcome, CompletionRecord, FeedBatch};
use crate::settings::{Settings, SettingsPatch};

use super::events::{AddOutcome, EngineEvent, RemoveOutcome};
use super::EngineError;

/// Cheaply cloneable handle to the engine task.
///
/// Every method enqueues an event and awaits the engine's reply. The engine
/// processes events strictly in order, one at a time.
#[derive(Clone)]
pub struct EngineHandle {
    tx: mpsc::Sender<EngineEvent>,
}

impl EngineHandle {
    /// Create a handle from a channel sender.
    pub(super) fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }

    /// Deliver a feed batch. Returns the number of torrents appended.
    pub async fn feed_batch(&self, batch: FeedBatch) -> Result<usize, EngineError> {
        self.request(|reply| EngineEvent::FeedBatch { batch, reply })
            .await
    }

    /// Deliver a download-completion record.
    pub async fn download_complete(
        &self,
        record: CompletionRecord,
    ) -> Result<CompletionOutcome, EngineError> {
        self.request(|reply| EngineEvent::DownloadComplete { record, reply })
            .await
    }

    /// Track a new movie by name.
    pub async fn add_movie(&self, name: String) -> Result<AddOutcome, EngineError> {
        self.request(|reply| EngineEvent::AddMovie { name, reply })
            .await
    }

    /// Stop tracking a movie by name.
    pub async fn remove_movie(&self, name: String) -> Result<RemoveOutcome, EngineError> {
        self.request(|reply| EngineEvent::RemoveMovie { name, reply })
            .await
    }

    /// Read the current settings snapshot.
    pub async fn snapshot(&self) -> Result<Settings, EngineError> {
        self.request(|reply| EngineEvent::Snapshot { reply }).await
    }

    /// Apply a settings patch and return the updated snapshot.
    pub async fn update_settings(&self, patch: SettingsPatch) -> Result<Settings, EngineError> {
        self.request(|reply| EngineEvent::UpdateSettings { patch, reply })
            .await
    }

    async fn request<T>(
        &self,
        make_event: impl FnOnce(oneshot::Sender<T>) -> EngineEvent,
    ) -> Result<T, EngineError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(make_event(reply_tx))
            .await
            .map_err(|_| EngineError::EngineGone)?;
        reply_rx.await.map_err(|_| EngineError::EngineGone)
    }
}
