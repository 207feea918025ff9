//! The four pipeline stages and the branch between the last two.
//!
//! Each stage takes the record by value and hands back the augmented record.
//! Only title refinement can fail; every other stage converts provider
//! trouble into placeholders or a not-found outcome.

mod metadata;
mod output;
mod theme;
mod title;

pub use metadata::{UNCERTAIN_TITLE_ERROR, acquire_metadata};
pub use output::{Branch, NotFoundReason, write_or_explain};
pub use theme::{THEME_FAILED_PLACEHOLDER, THEME_SKIPPED_PLACEHOLDER, derive_theme};
pub use title::{parse_refinement, refine_title};

use marquee_error::{MarqueeError, MarqueeErrorKind};

/// One-line description of a failure without source locations.
pub(crate) fn failure_summary(err: &MarqueeError) -> String {
    match err.kind() {
        MarqueeErrorKind::Provider(e) => e.kind.to_string(),
        MarqueeErrorKind::Json(e) => format!("could not parse response: {}", e.message),
        MarqueeErrorKind::Storage(e) => e.kind.to_string(),
        other => other.to_string(),
    }
}
