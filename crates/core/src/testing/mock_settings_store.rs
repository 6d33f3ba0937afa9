//! Mock settings store for testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::settings::{Settings, SettingsError, SettingsStore};

/// Mock implementation of the [`SettingsStore`] trait.
///
/// Records every saved snapshot and can be switched into a failing mode.
#[derive(Debug, Default)]
pub struct MockSettingsStore {
    saved: Arc<RwLock<Vec<Settings>>>,
    fail_saves: Arc<RwLock<bool>>,
    initial: Arc<RwLock<Settings>>,
}

impl MockSettingsStore {
    /// Create a mock store that loads default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the snapshot returned by `load`.
    pub async fn set_initial(&self, settings: Settings) {
        *self.initial.write().await = settings;
    }

    /// Make all subsequent saves fail (or succeed again).
    pub async fn fail_saves(&self, fail: bool) {
        *self.fail_saves.write().await = fail;
    }

    /// Number of successful saves.
    pub async fn save_count(&self) -> usize {
        self.saved.read().await.len()
    }

    /// The most recently saved snapshot.
    pub async fn last_saved(&self) -> Option<Settings> {
        self.saved.read().await.last().cloned()
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn load(&self) -> Result<Settings, SettingsError> {
        Ok(self.initial.read().await.clone())
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if *self.fail_saves.read().await {
            return Err(SettingsError::WriteFailed {
                path: "mock".into(),
                source: std::io::Error::other("injected failure"),
            });
        }
        self.saved.write().await.push(settings.clone());
        Ok(())
    }
}
