//! Stage 1: title refinement.

use crate::prompts::{self, UNCERTAIN_MARKER};
use marquee_core::PipelineRecord;
use marquee_error::{MarqueeResult, PipelineError, PipelineErrorKind};
use marquee_interface::LanguageModel;
use tracing::{info, instrument, warn};

/// Split a refinement response into the title and the uncertainty flag.
///
/// Returns `None` when the response holds no title at all.
///
/// # Examples
///
/// ```
/// use marquee_pipeline::parse_refinement;
///
/// assert_eq!(parse_refinement(" Inception \n"), Some(("Inception".to_string(), false)));
/// assert_eq!(parse_refinement("Solaris [uncertain]"), Some(("Solaris".to_string(), true)));
/// assert_eq!(parse_refinement("   "), None);
/// ```
pub fn parse_refinement(text: &str) -> Option<(String, bool)> {
    let text = text.trim();

    let (title, uncertain) = match strip_marker(text) {
        Some(guess) => (guess.trim(), true),
        None => (text, false),
    };

    let title = title.trim_matches(|c| c == '"' || c == '\'').trim();
    match (title.is_empty(), uncertain) {
        (false, _) => Some((title.to_string(), uncertain)),
        // A bare marker is an answer: the model has no guess at all
        (true, true) => Some((String::new(), true)),
        (true, false) => None,
    }
}

/// The text before a trailing uncertainty marker, if there is one.
///
/// Punctuation after the marker is ignored; a certain title keeps its own.
fn strip_marker(text: &str) -> Option<&str> {
    let end = text
        .trim_end_matches(|c: char| c.is_ascii_punctuation() && c != ']')
        .trim_end();
    let at = end.len().checked_sub(UNCERTAIN_MARKER.len())?;
    (end.is_char_boundary(at) && end[at..].eq_ignore_ascii_case(UNCERTAIN_MARKER))
        .then(|| &end[..at])
}

/// Resolve the raw title to a best-guess official title.
///
/// A provider failure is fatal because there is no other source of a title.
/// Empty model output falls back to the raw title, treated as certain. A bare
/// uncertainty marker keeps the raw title as the best guess.
#[instrument(skip(model, record), fields(raw_title = %record.raw_title(), model = %model.model_name()))]
pub async fn refine_title(
    model: &dyn LanguageModel,
    mut record: PipelineRecord,
) -> MarqueeResult<PipelineRecord> {
    let raw = record.raw_title().trim().to_string();
    if raw.is_empty() {
        return Err(PipelineError::new(PipelineErrorKind::EmptyTitle).into());
    }

    let response = model
        .complete(&prompts::title_refinement(&raw))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Title refinement call failed");
            PipelineError::new(PipelineErrorKind::TitleRefinement {
                title: raw.clone(),
                message: super::failure_summary(&e),
            })
        })?;

    let (refined, uncertain) = match parse_refinement(&response.text) {
        Some((title, uncertain)) if !title.is_empty() => (title, uncertain),
        Some((_, uncertain)) => (raw.clone(), uncertain),
        None => {
            warn!("Model returned no title, keeping the raw title");
            (raw.clone(), false)
        }
    };

    info!(refined_title = %refined, uncertain, "Title refined");
    record.refined_title = Some(refined);
    record.title_uncertain = uncertain;
    Ok(record)
}
