//! Trait definition for the relocation primitive.

use std::path::Path;

use async_trait::async_trait;

use super::error::RelocateError;

/// Filesystem primitive used to relocate a completed download.
///
/// Both operations are fallible; the completion matcher treats any failure
/// as best-effort enrichment and never propagates it.
#[async_trait]
pub trait Relocator: Send + Sync {
    /// Ensure the directory exists, creating parents as needed.
    async fn ensure_dir(&self, path: &Path) -> Result<(), RelocateError>;

    /// Copy a file, overwriting any existing destination.
    async fn copy_file(&self, src: &Path, dst: &Path) -> Result<(), RelocateError>;
}
