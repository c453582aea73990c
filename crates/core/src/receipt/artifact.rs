//! Scoped ownership of the transient on-disk receipt image.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Owns a transient receipt file for the duration of one request.
///
/// The file is deleted exactly once, on whichever exit path comes first:
/// the explicit [`cleanup`](Self::cleanup) call, or `Drop` as the
/// unconditional backstop. A receipt is never orphaned regardless of how
/// the request ends.
#[derive(Debug)]
pub struct ReceiptArtifact {
    path: PathBuf,
    armed: bool,
}

impl ReceiptArtifact {
    /// Takes ownership of the receipt file at `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    /// The path of the owned file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the file currently exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Deletes the receipt file. A missing file is not an error.
    pub async fn cleanup(mut self) {
        self.armed = false;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => debug!(receipt = %self.path.display(), "deleted receipt file"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                warn!(receipt = %self.path.display(), %err, "failed to delete receipt file");
            }
        }
    }

    /// Releases the file without deleting it. The caller becomes
    /// responsible for the artifact's lifecycle.
    #[must_use]
    pub fn into_path(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for ReceiptArtifact {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(receipt = %self.path.display(), "deleted receipt file on drop"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                warn!(receipt = %self.path.display(), %err, "failed to delete receipt file");
            }
        }
    }
}
