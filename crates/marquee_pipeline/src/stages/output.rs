//! Stage 4: write the document, or explain why nothing was written.

use crate::{output_filename, render_document};
use marquee_core::{NOT_AVAILABLE, PipelineRecord};
use marquee_storage::OutputSink;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Why a run ends without writing a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    /// Title refinement was not confident in its answer
    UncertainTitle {
        /// What the user typed
        raw_title: String,
        /// What refinement guessed
        best_guess: String,
    },
    /// The metadata provider had no match or failed
    Missing {
        /// Title that was looked up
        title: String,
        /// Provider explanation
        error: String,
    },
}

impl NotFoundReason {
    /// Status line reported to the user.
    pub fn message(&self) -> String {
        match self {
            NotFoundReason::UncertainTitle {
                raw_title,
                best_guess,
            } => format!(
                "Could not confidently identify the movie '{}' (best guess: '{}'); no file was written.",
                raw_title, best_guess
            ),
            NotFoundReason::Missing { title, error } => format!(
                "Movie '{}' not found: {}; no file was written.",
                title, error
            ),
        }
    }
}

/// Terminal path chosen after metadata acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    /// Metadata was found; write the document
    Write,
    /// Nothing to write
    NotFound(NotFoundReason),
}

impl Branch {
    /// Pick the terminal path for a record that has been through stage 2.
    ///
    /// An uncertain title is reported ahead of any provider error.
    pub fn select(record: &PipelineRecord) -> Self {
        let metadata = match record.metadata.as_ref() {
            Some(metadata) if metadata.found() => return Branch::Write,
            other => other,
        };

        let title = record.effective_title().to_string();
        if record.title_uncertain {
            return Branch::NotFound(NotFoundReason::UncertainTitle {
                raw_title: record.raw_title().to_string(),
                best_guess: title,
            });
        }

        let error = metadata
            .and_then(|m| m.error())
            .unwrap_or("Metadata was not acquired")
            .to_string();
        Branch::NotFound(NotFoundReason::Missing { title, error })
    }
}

/// Run the chosen terminal branch.
///
/// Never fails: a write error is reported in `final_message` and leaves
/// `written_path` unset.
#[instrument(skip(sink, record, branch), fields(title = %record.effective_title(), dir = %output_dir.display()))]
pub async fn write_or_explain(
    sink: &dyn OutputSink,
    mut record: PipelineRecord,
    branch: Branch,
    output_dir: &Path,
) -> PipelineRecord {
    let reason = match branch {
        Branch::Write => return write_document(sink, record, output_dir).await,
        Branch::NotFound(reason) => reason,
    };

    warn!(reason = ?reason, "No file written");
    record.final_message = Some(reason.message());
    record.written_path = None;
    record
}

async fn write_document(
    sink: &dyn OutputSink,
    mut record: PipelineRecord,
    output_dir: &Path,
) -> PipelineRecord {
    let metadata = record.metadata.as_ref();
    let title = metadata
        .map(|m| m.title())
        .filter(|t| *t != NOT_AVAILABLE)
        .unwrap_or(record.effective_title())
        .to_string();

    let document = render_document(metadata, record.theme.as_deref(), Some(&title));
    let path = output_dir.join(output_filename(&title));

    let written = match sink.ensure_directory(output_dir).await {
        Ok(()) => sink.write_file(&path, &document).await,
        Err(e) => Err(e),
    };

    match written {
        Ok(path) => {
            info!(path = %path.display(), "Movie details written");
            record.final_message = Some(format!(
                "Successfully wrote movie details for '{}' to {}",
                title,
                path.display()
            ));
            record.written_path = Some(path);
        }
        Err(e) => {
            warn!(error = %e, "Failed to write movie details");
            record.final_message = Some(format!(
                "Failed to write movie details for '{}': {}",
                title,
                super::failure_summary(&e)
            ));
            record.written_path = None;
        }
    }
    record
}
