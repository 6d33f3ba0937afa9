//! Settings persistence.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use super::types::Settings;

/// Errors that can occur loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings file {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },
}

/// Durable store for the settings snapshot.
///
/// The engine saves after every mutating operation; saves are best-effort
/// from the caller's point of view (logged, never fatal to the event).
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the persisted snapshot. A missing store yields defaults.
    async fn load(&self) -> Result<Settings, SettingsError>;

    /// Persist a snapshot.
    async fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// Settings store backed by a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn load(&self) -> Result<Settings, SettingsError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Settings file {:?} not found, using defaults", self.path);
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(SettingsError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| SettingsError::ParseFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let json = serde_json::to_vec_pretty(settings).map_err(|e| SettingsError::ParseFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| SettingsError::WriteFailed {
                path: self.path.clone(),
                source,
            })
    }
}
