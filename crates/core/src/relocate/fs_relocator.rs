//! Filesystem-backed relocator.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use super::error::RelocateError;
use super::traits::Relocator;

/// Relocator over `tokio::fs`.
#[derive(Debug, Default)]
pub struct FsRelocator;

impl FsRelocator {
    /// Create a new filesystem relocator.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Relocator for FsRelocator {
    async fn ensure_dir(&self, path: &Path) -> Result<(), RelocateError> {
        tokio::fs::create_dir_all(path).await.map_err(|source| {
            RelocateError::DirectoryCreationFailed {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    async fn copy_file(&self, src: &Path, dst: &Path) -> Result<(), RelocateError> {
        let bytes = tokio::fs::copy(src, dst)
            .await
            .map_err(|error| RelocateError::CopyFailed {
                src: src.to_path_buf(),
                dst: dst.to_path_buf(),
                error,
            })?;
        debug!("Copied {} bytes from {:?} to {:?}", bytes, src, dst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_dir_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");

        let relocator = FsRelocator::new();
        relocator.ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());

        // Second call on an existing directory also succeeds.
        relocator.ensure_dir(&nested).await.unwrap();
    }

    #[tokio::test]
    async fn test_copy_file() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("movie.mkv");
        let dst = tmp.path().join("library/movie.mkv");
        tokio::fs::write(&src, b"not actually a movie").await.unwrap();

        let relocator = FsRelocator::new();
        relocator.ensure_dir(dst.parent().unwrap()).await.unwrap();
        relocator.copy_file(&src, &dst).await.unwrap();

        let copied = tokio::fs::read(&dst).await.unwrap();
        assert_eq!(copied, b"not actually a movie");
        // Source is left in place: relocation copies, it does not move.
        assert!(src.exists());
    }

    #[tokio::test]
    async fn test_copy_missing_source_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let relocator = FsRelocator::new();

        let result = relocator
            .copy_file(&tmp.path().join("missing.mkv"), &tmp.path().join("out.mkv"))
            .await;
        assert!(matches!(result, Err(RelocateError::CopyFailed { .. })));
    }
}
