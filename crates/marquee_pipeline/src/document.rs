//! Output document layout.

use crate::sanitize_filename;
use marquee_core::{MovieMetadata, NOT_AVAILABLE};

/// Extension given to every output file.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Render the fixed-format text record.
///
/// Any section without a value reads `N/A`.
///
/// # Examples
///
/// ```
/// use marquee_pipeline::render_document;
///
/// let text = render_document(None, None, Some("Inception"));
/// assert!(text.starts_with("Movie Title: Inception (N/A)\n"));
/// ```
pub fn render_document(
    metadata: Option<&MovieMetadata>,
    theme: Option<&str>,
    fallback_title: Option<&str>,
) -> String {
    let field = |f: fn(&MovieMetadata) -> &str| metadata.map(f).unwrap_or(NOT_AVAILABLE);
    let title = metadata
        .map(MovieMetadata::title)
        .filter(|t| *t != NOT_AVAILABLE)
        .or(fallback_title)
        .unwrap_or(NOT_AVAILABLE);
    let theme = theme
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(NOT_AVAILABLE);

    format!(
        "Movie Title: {} ({})\n\
         IMDb Rating: {}\n\
         Main Cast: {}\n\
         Genre: {}\n\
         \n\
         Theme:\n\
         {}\n\
         \n\
         Plot Summary:\n\
         {}\n",
        title,
        field(MovieMetadata::year),
        field(MovieMetadata::imdb_rating),
        field(MovieMetadata::main_cast),
        field(MovieMetadata::genre),
        theme,
        field(MovieMetadata::plot_summary),
    )
}

/// File name for a title: sanitized stem plus `.txt`.
pub fn output_filename(title: &str) -> String {
    format!("{}.{}", sanitize_filename(title), OUTPUT_EXTENSION)
}
