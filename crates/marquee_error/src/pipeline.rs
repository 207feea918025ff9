//! Pipeline error types.

/// Specific error conditions raised by the pipeline itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Raw title is empty or whitespace
    #[display("Movie title cannot be empty")]
    EmptyTitle,
    /// Title refinement provider call failed; no fallback title source exists
    #[display("Title refinement failed for '{}': {}", title, message)]
    TitleRefinement {
        /// Raw title being refined
        title: String,
        /// Underlying failure
        message: String,
    },
}

/// Error type for pipeline operations.
///
/// # Examples
///
/// ```
/// use marquee_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::EmptyTitle);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
