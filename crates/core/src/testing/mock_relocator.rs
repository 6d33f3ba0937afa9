//! Mock relocator for testing.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::relocate::{RelocateError, Relocator};

/// Mock implementation of the [`Relocator`] trait.
///
/// Records every `ensure_dir` and `copy_file` call for assertions and can
/// inject a failure into the next operation of either kind.
#[derive(Debug, Default)]
pub struct MockRelocator {
    dirs: Arc<RwLock<Vec<PathBuf>>>,
    copies: Arc<RwLock<Vec<(PathBuf, PathBuf)>>>,
    fail_next_dir: Arc<RwLock<bool>>,
    fail_next_copy: Arc<RwLock<bool>>,
}

impl MockRelocator {
    /// Create a new mock relocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directories passed to `ensure_dir`, in call order.
    pub async fn recorded_dirs(&self) -> Vec<PathBuf> {
        self.dirs.read().await.clone()
    }

    /// (source, destination) pairs passed to `copy_file`, in call order.
    pub async fn recorded_copies(&self) -> Vec<(PathBuf, PathBuf)> {
        self.copies.read().await.clone()
    }

    /// Make the next `ensure_dir` call fail.
    pub async fn fail_next_ensure_dir(&self) {
        *self.fail_next_dir.write().await = true;
    }

    /// Make the next `copy_file` call fail.
    pub async fn fail_next_copy(&self) {
        *self.fail_next_copy.write().await = true;
    }
}

#[async_trait]
impl Relocator for MockRelocator {
    async fn ensure_dir(&self, path: &Path) -> Result<(), RelocateError> {
        let mut fail = self.fail_next_dir.write().await;
        if *fail {
            *fail = false;
            return Err(RelocateError::DirectoryCreationFailed {
                path: path.to_path_buf(),
                source: std::io::Error::other("injected failure"),
            });
        }
        self.dirs.write().await.push(path.to_path_buf());
        Ok(())
    }

    async fn copy_file(&self, src: &Path, dst: &Path) -> Result<(), RelocateError> {
        let mut fail = self.fail_next_copy.write().await;
        if *fail {
            *fail = false;
            return Err(RelocateError::CopyFailed {
                src: src.to_path_buf(),
                dst: dst.to_path_buf(),
                error: std::io::Error::other("injected failure"),
            });
        }
        self.copies
            .write()
            .await
            .push((src.to_path_buf(), dst.to_path_buf()));
        Ok(())
    }
}
