//! The engine task and its event dispatch.
//!
//! Scheduling is single-threaded and event-driven: feed batches, download
//! completions and CRUD commands are all [`EngineEvent`]s sent through one
//! mpsc channel and handled to completion in order by the [`Engine`] task.
//! No two handlers interleave, so the registry needs no locking.

mod events;
mod handle;
mod service;

pub use events::{AddOutcome, EngineEvent, RemoveOutcome};
pub use handle::EngineHandle;
pub use service::{create_engine, Engine};

use thiserror::Error;

/// Errors from interacting with the engine task.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine task has stopped and can no longer process events.
    #[error("Engine is no longer running")]
    EngineGone,
}
