//! Stage 3: theme derivation.

use crate::prompts;
use marquee_core::{MovieMetadata, PipelineRecord};
use marquee_interface::LanguageModel;
use tracing::{info, instrument, warn};

/// Theme used when there is nothing to derive a theme from.
pub const THEME_SKIPPED_PLACEHOLDER: &str = "Theme not derived: insufficient plot information.";

/// Theme used when the model call fails or answers with nothing.
pub const THEME_FAILED_PLACEHOLDER: &str = "Theme unavailable: theme derivation failed.";

fn has_usable_plot(metadata: &MovieMetadata, min_plot_chars: usize) -> bool {
    metadata.found()
        && metadata.has_plot()
        && metadata.plot_summary().trim().chars().count() >= min_plot_chars
}

/// Summarize the plot into a theme.
///
/// Never fails: missing or short plots and model failures all produce a
/// placeholder theme.
#[instrument(skip(model, record), fields(title = %record.effective_title()))]
pub async fn derive_theme(
    model: &dyn LanguageModel,
    mut record: PipelineRecord,
    min_plot_chars: usize,
) -> PipelineRecord {
    let metadata = match record.metadata.as_ref() {
        Some(metadata) if has_usable_plot(metadata, min_plot_chars) => metadata,
        _ => {
            info!("No usable plot, skipping theme derivation");
            record.theme = Some(THEME_SKIPPED_PLACEHOLDER.to_string());
            return record;
        }
    };

    let theme = match model.complete(&prompts::theme_derivation(metadata)).await {
        Ok(response) if !response.text.trim().is_empty() => response.text.trim().to_string(),
        Ok(_) => {
            warn!("Model returned an empty theme");
            THEME_FAILED_PLACEHOLDER.to_string()
        }
        Err(e) => {
            warn!(error = %e, "Theme derivation failed, using placeholder");
            THEME_FAILED_PLACEHOLDER.to_string()
        }
    };

    info!(theme_length = theme.len(), "Theme derived");
    record.theme = Some(theme);
    record
}
