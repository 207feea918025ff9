//! Staged movie pipeline.
//!
//! A raw title passes through four stages, each taking and returning a
//! [`PipelineRecord`](marquee_core::PipelineRecord):
//!
//! 1. **Title refinement** asks the language model for the official title,
//!    flagging answers it is unsure of.
//! 2. **Metadata acquisition** looks the title up through a
//!    [`MetadataProvider`](marquee_interface::MetadataProvider). Uncertain
//!    titles are never looked up.
//! 3. **Theme derivation** summarizes the plot, or records a placeholder.
//! 4. **Output** writes a text document, or explains why it could not.
//!
//! Only the first stage can fail the run. Everything after it degrades to
//! placeholders and a not-found outcome.
//!
//! # Example
//!
//! ```rust,no_run
//! use marquee_pipeline::{PipelineExecutor, PipelineSettings};
//! # use std::sync::Arc;
//! # async fn example(
//! #     model: Arc<dyn marquee_interface::LanguageModel>,
//! #     metadata: Arc<dyn marquee_interface::MetadataProvider>,
//! # ) -> marquee_error::MarqueeResult<()> {
//! let executor = PipelineExecutor::new(
//!     model,
//!     metadata,
//!     Arc::new(marquee_storage::FileSystemOutput::new()),
//!     PipelineSettings::default(),
//! );
//! let record = executor.run("inceptio").await?;
//! println!("{}", record.final_message.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod deadline;
mod document;
mod executor;
mod extraction;
mod prompts;
mod sanitize;
mod simulated;
mod stages;

pub use deadline::{DeadlineModel, DeadlineProvider};
pub use document::{OUTPUT_EXTENSION, output_filename, render_document};
pub use executor::{
    DEFAULT_MIN_PLOT_CHARS, DEFAULT_OUTPUT_DIR, PipelineExecutor, PipelineSettings,
    PipelineSettingsBuilder,
};
pub use extraction::{extract_structured_text, parse_model_json};
pub use prompts::UNCERTAIN_MARKER;
pub use sanitize::{MAX_FILENAME_LEN, PLACEHOLDER_FILENAME, sanitize_filename};
pub use simulated::SimulatedMetadataProvider;
pub use stages::{
    Branch, NotFoundReason, THEME_FAILED_PLACEHOLDER, THEME_SKIPPED_PLACEHOLDER,
    UNCERTAIN_TITLE_ERROR, acquire_metadata, derive_theme, parse_refinement, refine_title,
    write_or_explain,
};
