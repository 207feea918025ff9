//! The record threaded through every pipeline stage.

use crate::MovieMetadata;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Accumulating state of a single pipeline run.
///
/// Created once per title, handed by value from stage to stage, and returned
/// to the caller when the run completes. `raw_title` is fixed at creation;
/// every other field is filled in by the stage that owns it.
///
/// # Examples
///
/// ```
/// use marquee_core::PipelineRecord;
///
/// let record = PipelineRecord::new("inceptio");
/// assert_eq!(record.raw_title(), "inceptio");
/// assert!(record.refined_title.is_none());
/// assert!(!record.title_uncertain);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRecord {
    raw_title: String,
    /// Best-guess official title, set by title refinement
    pub refined_title: Option<String>,
    /// Set when refinement could not confidently resolve the title
    pub title_uncertain: bool,
    /// Set by metadata acquisition
    pub metadata: Option<MovieMetadata>,
    /// Set by theme derivation
    pub theme: Option<String>,
    /// Human-readable outcome, set by the terminal stage
    pub final_message: Option<String>,
    /// Where the output file was written; `None` when nothing was written
    pub written_path: Option<PathBuf>,
}

impl PipelineRecord {
    /// Start a record for the user's title.
    pub fn new(raw_title: impl Into<String>) -> Self {
        Self {
            raw_title: raw_title.into(),
            refined_title: None,
            title_uncertain: false,
            metadata: None,
            theme: None,
            final_message: None,
            written_path: None,
        }
    }

    /// The user's original input.
    pub fn raw_title(&self) -> &str {
        &self.raw_title
    }

    /// Refined title when set, otherwise the raw title.
    pub fn effective_title(&self) -> &str {
        self.refined_title.as_deref().unwrap_or(&self.raw_title)
    }
}
