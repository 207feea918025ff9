//! Provider error types for language model and metadata backends.

/// Failure conditions raised by an external provider call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Required credential not found in environment
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Request could not be sent or the connection dropped
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// No response before the per-call deadline
    #[display("No response within {} seconds", seconds)]
    Timeout {
        /// Deadline that elapsed
        seconds: u64,
    },
    /// Provider answered without any usable content
    #[display("Provider returned no content")]
    EmptyResponse,
    /// Provider answered with content that could not be decoded
    #[display("Could not parse provider response: {}", _0)]
    ResponseParse(String),
}

impl ProviderErrorKind {
    /// Whether a later identical call could plausibly succeed.
    ///
    /// Nothing retries on this signal; it is reported in logs so operators can
    /// tell outages apart from bad requests.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderErrorKind::HttpStatus { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            ProviderErrorKind::Transport(_) => true,
            ProviderErrorKind::Timeout { .. } => true,
            _ => false,
        }
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use marquee_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::MissingApiKey("OPENAI_API_KEY".into()));
/// assert!(format!("{}", err).contains("OPENAI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the underlying condition is transient.
    pub fn is_transient(&self) -> bool {
        self.kind.is_transient()
    }
}
