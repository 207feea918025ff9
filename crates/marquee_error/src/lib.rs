//! Error types for the marquee pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use marquee_error::{MarqueeResult, StorageError, StorageErrorKind};
//!
//! fn save_record() -> MarqueeResult<String> {
//!     Err(StorageError::new(StorageErrorKind::FileWrite("disk full".into())))?
//! }
//!
//! match save_record() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod json;
mod pipeline;
mod provider;
mod storage;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{MarqueeError, MarqueeErrorKind, MarqueeResult};
pub use json::JsonError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use provider::{ProviderError, ProviderErrorKind};
pub use storage::{StorageError, StorageErrorKind};
