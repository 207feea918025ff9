//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, JsonError, PipelineError, ProviderError, StorageError};

/// Every error condition the marquee crates can surface.
///
/// # Examples
///
/// ```
/// use marquee_error::{MarqueeError, JsonError};
///
/// let json_err = JsonError::new("expected value at line 1 column 1");
/// let err: MarqueeError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MarqueeErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// External provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Output storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Marquee error with kind discrimination.
///
/// # Examples
///
/// ```
/// use marquee_error::{MarqueeResult, ConfigError};
///
/// fn might_fail() -> MarqueeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Marquee Error: {}", _0)]
pub struct MarqueeError(Box<MarqueeErrorKind>);

impl MarqueeError {
    /// Create a new error from a kind.
    pub fn new(kind: MarqueeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MarqueeErrorKind {
        &self.0
    }

    /// The provider error this wraps, if any.
    pub fn as_provider(&self) -> Option<&ProviderError> {
        match self.kind() {
            MarqueeErrorKind::Provider(e) => Some(e),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to MarqueeErrorKind
impl<T> From<T> for MarqueeError
where
    T: Into<MarqueeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for marquee operations.
pub type MarqueeResult<T> = std::result::Result<T, MarqueeError>;
