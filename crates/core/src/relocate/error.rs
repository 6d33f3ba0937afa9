//! Error types for the relocate module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while relocating a completed download.
#[derive(Debug, Error)]
pub enum RelocateError {
    /// Failed to create the destination directory.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy the file.
    #[error("Failed to copy file from {src} to {dst}")]
    CopyFailed {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        error: std::io::Error,
    },
}
