//! Filesystem output implementation.

use crate::OutputSink;
use marquee_error::{MarqueeResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Writes documents to the local filesystem.
///
/// Writes go to a uniquely named temp file in the destination directory and
/// are then renamed over the target, so readers never observe a partial file.
/// Concurrent writers to the same path race; the last rename wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemOutput;

impl FileSystemOutput {
    /// Create a filesystem sink.
    pub fn new() -> Self {
        Self
    }

    fn temp_path_for(path: &Path) -> MarqueeResult<PathBuf> {
        let file_name = path.file_name().ok_or_else(|| {
            StorageError::new(StorageErrorKind::InvalidPath(format!(
                "{} has no file name",
                path.display()
            )))
        })?;

        let temp_name = format!(
            ".{}.{}.tmp",
            file_name.to_string_lossy(),
            Uuid::new_v4().simple()
        );
        Ok(path.with_file_name(temp_name))
    }
}

#[async_trait::async_trait]
impl OutputSink for FileSystemOutput {
    #[tracing::instrument(skip(self), fields(dir = %dir.display()))]
    async fn ensure_directory(&self, dir: &Path) -> MarqueeResult<()> {
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        tracing::debug!("Output directory ready");
        Ok(())
    }

    #[tracing::instrument(skip(self, content), fields(path = %path.display(), size = content.len()))]
    async fn write_file(&self, path: &Path, content: &str) -> MarqueeResult<PathBuf> {
        let temp_path = Self::temp_path_for(path)?;

        tokio::fs::write(&temp_path, content).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        if let Err(e) = tokio::fs::rename(&temp_path, path).await {
            // Leave no stray temp file behind on failure
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
            .into());
        }

        tracing::info!(path = %path.display(), size = content.len(), "Wrote output file");
        Ok(path.to_path_buf())
    }
}
