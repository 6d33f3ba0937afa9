//! The engine task: owns the registry and reacts to events.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::matching::{self, Resolution};
use crate::registry::{Movie, MovieRegistry};
use crate::relocate::Relocator;
use crate::settings::{Settings, SettingsStore};

use super::events::{AddOutcome, EngineEvent, RemoveOutcome};
use super::handle::EngineHandle;

/// Buffer size for the engine event channel.
const ENGINE_BUFFER_SIZE: usize = 64;

/// Create an engine from a loaded settings snapshot.
///
/// Returns the engine (to be driven via [`Engine::run`] on a spawned task)
/// and a cloneable handle for delivering events to it.
pub fn create_engine(
    settings: Settings,
    store: Arc<dyn SettingsStore>,
    relocator: Arc<dyn Relocator>,
) -> (Engine, EngineHandle) {
    let (tx, rx) = mpsc::channel(ENGINE_BUFFER_SIZE);
    let engine = Engine {
        registry: MovieRegistry::from_movies(settings.movies),
        min_resolution: settings.min_resolution,
        save_path: settings.save_path,
        tmdb_api_key: settings.tmdb_api_key,
        store,
        relocator,
        rx,
    };
    (engine, EngineHandle::new(tx))
}

/// The acquisition matching and state engine.
///
/// A single task owns all mutable state; events are handled to completion
/// in arrival order, so registry mutation needs no locking. The settings
/// snapshot is persisted after every mutating event.
pub struct Engine {
    registry: MovieRegistry,
    min_resolution: Resolution,
    save_path: String,
    tmdb_api_key: String,
    store: Arc<dyn SettingsStore>,
    relocator: Arc<dyn Relocator>,
    rx: mpsc::Receiver<EngineEvent>,
}

impl Engine {
    /// Run the engine, consuming events until all handles are dropped.
    pub async fn run(mut self) {
        info!(
            "Engine started with {} tracked movie(s), min resolution {}",
            self.registry.len(),
            self.min_resolution
        );

        while let Some(event) = self.rx.recv().await {
            self.handle_event(event).await;
        }

        info!("Engine stopped");
    }

    async fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::FeedBatch { batch, reply } => {
                let appended = matching::match_batch(
                    &mut self.registry,
                    &batch,
                    self.min_resolution,
                    &self.save_path,
                );
                if appended > 0 {
                    self.persist().await;
                }
                let _ = reply.send(appended);
            }
            EngineEvent::DownloadComplete { record, reply } => {
                let outcome = matching::handle_completion(
                    &mut self.registry,
                    &record,
                    self.relocator.as_ref(),
                )
                .await;
                if matches!(outcome, matching::CompletionOutcome::Matched { .. }) {
                    self.persist().await;
                }
                let _ = reply.send(outcome);
            }
            EngineEvent::AddMovie { name, reply } => {
                let outcome = if self.registry.add(Movie::new(name.trim())) {
                    info!("Added '{}' to list", name.trim());
                    self.persist().await;
                    AddOutcome::Added(self.snapshot())
                } else {
                    warn!("Movie '{}' is already tracked", name.trim());
                    AddOutcome::AlreadyTracked
                };
                let _ = reply.send(outcome);
            }
            EngineEvent::RemoveMovie { name, reply } => {
                let outcome = if self.registry.remove(&name) {
                    info!("Removed '{}' from list", name);
                    self.persist().await;
                    RemoveOutcome::Removed(self.snapshot())
                } else {
                    warn!("Movie '{}' is not tracked", name);
                    RemoveOutcome::NotTracked
                };
                let _ = reply.send(outcome);
            }
            EngineEvent::Snapshot { reply } => {
                let _ = reply.send(self.snapshot());
            }
            EngineEvent::UpdateSettings { patch, reply } => {
                let mut settings = self.snapshot();
                settings.apply(patch);
                self.min_resolution = settings.min_resolution;
                self.save_path = settings.save_path.clone();
                self.tmdb_api_key = settings.tmdb_api_key.clone();
                self.persist().await;
                let _ = reply.send(self.snapshot());
            }
        }
    }

    fn snapshot(&self) -> Settings {
        Settings {
            movies: self.registry.to_movies(),
            min_resolution: self.min_resolution,
            save_path: self.save_path.clone(),
            tmdb_api_key: self.tmdb_api_key.clone(),
        }
    }

    /// Persist the current snapshot. A save failure is logged and swallowed;
    /// durability belongs to the store, not to event handling.
    async fn persist(&self) {
        let snapshot = self.snapshot();
        if let Err(e) = self.store.save(&snapshot).await {
            error!("Failed to persist settings: {}", e);
        }
    }
}
