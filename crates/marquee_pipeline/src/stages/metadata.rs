//! Stage 2: metadata acquisition.

use marquee_core::{MovieMetadata, PipelineRecord};
use marquee_interface::{LookupOutcome, MetadataProvider};
use tracing::{info, instrument, warn};

/// Error recorded when the lookup is skipped for an uncertain title.
pub const UNCERTAIN_TITLE_ERROR: &str = "Title could not be confidently identified";

/// Attach normalized metadata for the refined title.
///
/// Never fails. An uncertain title skips the provider entirely; explicit
/// not-found answers and provider failures both become `found == false`.
#[instrument(
    skip(provider, record),
    fields(title = %record.effective_title(), provider = provider.provider_name(), found = tracing::field::Empty)
)]
pub async fn acquire_metadata(
    provider: &dyn MetadataProvider,
    mut record: PipelineRecord,
) -> PipelineRecord {
    let title = record.effective_title().to_string();

    let metadata = if record.title_uncertain {
        info!("Skipping lookup for uncertain title");
        MovieMetadata::not_found(&title, UNCERTAIN_TITLE_ERROR)
    } else {
        match provider.lookup(&title).await {
            Ok(LookupOutcome::Found(facts)) => MovieMetadata::from_facts(facts, &title),
            Ok(LookupOutcome::NotFound(reason)) => {
                warn!(reason = %reason, "Provider has no match for title");
                MovieMetadata::not_found(&title, reason)
            }
            Err(e) => {
                let transient = e.as_provider().is_some_and(|p| p.is_transient());
                warn!(error = %e, transient, "Metadata lookup failed, treating as not found");
                MovieMetadata::not_found(
                    &title,
                    format!("Metadata lookup failed: {}", super::failure_summary(&e)),
                )
            }
        }
    };

    tracing::Span::current().record("found", metadata.found());
    info!(found = metadata.found(), "Metadata acquired");
    record.metadata = Some(metadata);
    record
}
