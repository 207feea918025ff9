//! Pipeline stage identity.

use serde::{Deserialize, Serialize};

/// The fixed stages of a pipeline run, in execution order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// Normalize the user's title
    TitleRefinement,
    /// Look up or simulate movie facts
    MetadataAcquisition,
    /// Summarize the plot into a theme
    ThemeDerivation,
    /// Write the record or explain why nothing was written
    Output,
}
