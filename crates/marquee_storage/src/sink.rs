//! Output sink trait definition.

use marquee_error::MarqueeResult;
use std::path::{Path, PathBuf};

/// Where the write branch puts finished documents.
#[async_trait::async_trait]
pub trait OutputSink: Send + Sync {
    /// Create the directory and any parents. Succeeds if it already exists.
    async fn ensure_directory(&self, dir: &Path) -> MarqueeResult<()>;

    /// Write `content` to `path`, replacing any existing file.
    ///
    /// Returns the path that was written.
    async fn write_file(&self, path: &Path, content: &str) -> MarqueeResult<PathBuf>;
}
