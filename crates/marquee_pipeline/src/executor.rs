//! Pipeline orchestration.

use crate::deadline::{DeadlineModel, DeadlineProvider};
use crate::stages::{self, Branch};
use marquee_core::{PipelineRecord, Stage};
use marquee_error::MarqueeResult;
use marquee_interface::{LanguageModel, MetadataProvider};
use marquee_storage::OutputSink;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

/// Directory output files land in unless configured otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "movie_outputs";

/// Plots shorter than this many characters are not worth a theme.
pub const DEFAULT_MIN_PLOT_CHARS: usize = 20;

/// Knobs for a pipeline run.
///
/// # Examples
///
/// ```
/// use marquee_pipeline::PipelineSettings;
///
/// let settings = PipelineSettings::builder()
///     .output_dir("out")
///     .call_timeout_secs(Some(30))
///     .build()
///     .unwrap();
/// assert_eq!(*settings.min_plot_chars(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct PipelineSettings {
    /// Directory output files are written to
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_DIR)")]
    output_dir: PathBuf,
    /// Minimum trimmed plot length for theme derivation
    #[builder(default = "DEFAULT_MIN_PLOT_CHARS")]
    min_plot_chars: usize,
    /// Deadline applied to every provider call; `None` leaves calls unbounded
    #[builder(default)]
    call_timeout_secs: Option<u64>,
}

impl PipelineSettings {
    /// Start building settings.
    pub fn builder() -> PipelineSettingsBuilder {
        PipelineSettingsBuilder::default()
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            min_plot_chars: DEFAULT_MIN_PLOT_CHARS,
            call_timeout_secs: None,
        }
    }
}

/// Runs titles through the four stages.
///
/// Providers are injected at construction; the executor holds no global
/// state and can be shared between tasks. Runs that produce the same output
/// filename race on the write, and the last one wins.
pub struct PipelineExecutor {
    model: Arc<dyn LanguageModel>,
    metadata: Arc<dyn MetadataProvider>,
    sink: Arc<dyn OutputSink>,
    settings: PipelineSettings,
}

impl PipelineExecutor {
    /// Assemble an executor from its providers.
    ///
    /// With `call_timeout_secs` set, both providers are wrapped so every call
    /// fails with a timeout error once the deadline passes.
    pub fn new(
        model: Arc<dyn LanguageModel>,
        metadata: Arc<dyn MetadataProvider>,
        sink: Arc<dyn OutputSink>,
        settings: PipelineSettings,
    ) -> Self {
        let (model, metadata) = match settings.call_timeout_secs {
            Some(secs) => {
                let limit = Duration::from_secs(secs);
                let model: Arc<dyn LanguageModel> = Arc::new(DeadlineModel::new(model, limit));
                let metadata: Arc<dyn MetadataProvider> =
                    Arc::new(DeadlineProvider::new(metadata, limit));
                (model, metadata)
            }
            None => (model, metadata),
        };

        Self {
            model,
            metadata,
            sink,
            settings,
        }
    }

    /// Settings this executor runs with.
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Process one title end to end.
    ///
    /// Returns the final record for every expected outcome, including "not
    /// found" and write failures. Errors only when the title is empty or title
    /// refinement itself fails.
    #[tracing::instrument(skip(self), fields(model = %self.model.model_name(), provider = self.metadata.provider_name()))]
    pub async fn run(&self, raw_title: &str) -> MarqueeResult<PipelineRecord> {
        tracing::info!("Starting pipeline run");
        let record = PipelineRecord::new(raw_title);

        let record = stages::refine_title(self.model.as_ref(), record)
            .instrument(stage_span(Stage::TitleRefinement))
            .await?;

        let record = stages::acquire_metadata(self.metadata.as_ref(), record)
            .instrument(stage_span(Stage::MetadataAcquisition))
            .await;

        let branch = Branch::select(&record);
        tracing::debug!(branch = ?branch, "Branch selected");

        let record = stages::derive_theme(self.model.as_ref(), record, self.settings.min_plot_chars)
            .instrument(stage_span(Stage::ThemeDerivation))
            .await;

        let record = stages::write_or_explain(
            self.sink.as_ref(),
            record,
            branch,
            &self.settings.output_dir,
        )
        .instrument(stage_span(Stage::Output))
        .await;

        tracing::info!(
            written = record.written_path.is_some(),
            "Pipeline run complete"
        );
        Ok(record)
    }
}

fn stage_span(stage: Stage) -> tracing::Span {
    tracing::info_span!("stage", stage = %stage)
}
