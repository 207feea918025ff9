//! Marquee: turn a rough movie title into a tidy text record.
//!
//! The pipeline refines the title with a language model, looks up metadata
//! (or has the model simulate the lookup), derives a one-line theme, and
//! writes everything to `<output_dir>/<sanitized_title>.txt`.
//!
//! # Architecture
//!
//! Marquee is organized as a workspace with focused crates:
//!
//! - `marquee_error` - Error types
//! - `marquee_core` - Pipeline record, metadata, and request types
//! - `marquee_interface` - `LanguageModel` and `MetadataProvider` traits
//! - `marquee_storage` - Output sinks
//! - `marquee_models` - OpenAI and OMDb clients
//! - `marquee_pipeline` - Stages and the executor
//!
//! This crate (`marquee`) re-exports everything for convenience and adds
//! configuration loading.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use marquee::{Credentials, MarqueeConfig, build_executor};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MarqueeConfig::load()?;
//! let credentials = Credentials::from_env(*config.metadata_source())?;
//! let executor = build_executor(&config, &credentials)?;
//!
//! let record = executor.run("inceptio").await?;
//! println!("{}", record.final_message.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembly;
pub mod config;

pub use assembly::build_executor;
pub use config::{Credentials, MarqueeConfig, MetadataSource};

// Re-export error types
pub use marquee_error::{
    BuilderError, BuilderErrorKind, ConfigError, JsonError, MarqueeError,
    MarqueeErrorKind, MarqueeResult, PipelineError, PipelineErrorKind, ProviderError,
    ProviderErrorKind, StorageError, StorageErrorKind,
};

// Re-export core types
pub use marquee_core::{
    CompletionRequest, CompletionResponse, Message, MovieFacts, MovieMetadata, NOT_AVAILABLE,
    PipelineRecord, Role, Stage,
};

// Re-export trait definitions
pub use marquee_interface::{LanguageModel, LookupOutcome, MetadataProvider};

// Re-export storage
pub use marquee_storage::{FileSystemOutput, OutputSink};

// Re-export providers
pub use marquee_models::{OMDB_API_KEY_VAR, OPENAI_API_KEY_VAR, OmdbClient, OpenAiClient};

// Re-export pipeline
pub use marquee_pipeline::{
    Branch, NotFoundReason, PipelineExecutor, PipelineSettings, SimulatedMetadataProvider,
    extract_structured_text, output_filename, render_document, sanitize_filename,
};
