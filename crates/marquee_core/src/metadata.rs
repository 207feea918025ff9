//! Normalized movie metadata.

use serde::{Deserialize, Serialize};

/// Literal used for every field a provider cannot supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// Cast list is truncated to this many names.
pub const MAX_CAST_MEMBERS: usize = 5;

/// Raw facts as reported by a metadata provider, before normalization.
///
/// Absent, blank, and `"N/A"` values are all treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieFacts {
    /// Official title
    pub title: Option<String>,
    /// Release year
    pub year: Option<String>,
    /// IMDb rating, as reported
    pub imdb_rating: Option<String>,
    /// Cast names, in billing order
    pub cast: Vec<String>,
    /// Genre list, as reported
    pub genre: Option<String>,
    /// Plot synopsis
    pub plot: Option<String>,
}

/// Movie metadata in the shape every provider is normalized into.
///
/// Fields are private so the invariants hold for every value:
/// - no field is ever empty; missing values are `"N/A"`
/// - `found == false` implies `error` is set and `plot_summary == "N/A"`
/// - `found == true` implies `error` is `None`
///
/// # Examples
///
/// ```
/// use marquee_core::{MovieFacts, MovieMetadata};
///
/// let facts = MovieFacts {
///     title: Some("Inception".into()),
///     year: Some("2010".into()),
///     ..Default::default()
/// };
/// let metadata = MovieMetadata::from_facts(facts, "inception");
/// assert!(metadata.found());
/// assert_eq!(metadata.genre(), "N/A");
///
/// let missing = MovieMetadata::not_found("Nonexistent", "Movie not found!");
/// assert!(!missing.found());
/// assert_eq!(missing.plot_summary(), "N/A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieMetadata {
    title: String,
    year: String,
    imdb_rating: String,
    main_cast: String,
    genre: String,
    plot_summary: String,
    found: bool,
    error: Option<String>,
}

impl MovieMetadata {
    /// Normalize provider facts for a successful lookup.
    ///
    /// `fallback_title` is used when the provider omits the title.
    pub fn from_facts(facts: MovieFacts, fallback_title: &str) -> Self {
        let title = normalize(facts.title)
            .or_else(|| normalize(Some(fallback_title.to_string())))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let cast = facts
            .cast
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty() && *name != NOT_AVAILABLE)
            .take(MAX_CAST_MEMBERS)
            .collect::<Vec<_>>();

        let main_cast = if cast.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            cast.join(", ")
        };

        Self {
            title,
            year: or_not_available(facts.year),
            imdb_rating: or_not_available(facts.imdb_rating),
            main_cast,
            genre: or_not_available(facts.genre),
            plot_summary: or_not_available(facts.plot),
            found: true,
            error: None,
        }
    }

    /// Metadata for a title that could not be resolved.
    ///
    /// An empty `error` is replaced with a generic explanation so the
    /// not-found invariant always holds.
    pub fn not_found(title: &str, error: impl Into<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            "Movie not found".to_string()
        } else {
            error.trim().to_string()
        };

        Self {
            title: or_not_available(Some(title.to_string())),
            year: NOT_AVAILABLE.to_string(),
            imdb_rating: NOT_AVAILABLE.to_string(),
            main_cast: NOT_AVAILABLE.to_string(),
            genre: NOT_AVAILABLE.to_string(),
            plot_summary: NOT_AVAILABLE.to_string(),
            found: false,
            error: Some(error),
        }
    }

    /// Official title, or `"N/A"`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Release year, or `"N/A"`.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// IMDb rating, or `"N/A"`.
    pub fn imdb_rating(&self) -> &str {
        &self.imdb_rating
    }

    /// Up to five comma-joined cast names, or `"N/A"`.
    pub fn main_cast(&self) -> &str {
        &self.main_cast
    }

    /// Genre, or `"N/A"`.
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Plot synopsis, or `"N/A"`.
    pub fn plot_summary(&self) -> &str {
        &self.plot_summary
    }

    /// Whether the provider resolved the title.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Why the title could not be resolved; `None` when found.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a plot is present at all.
    pub fn has_plot(&self) -> bool {
        self.plot_summary != NOT_AVAILABLE
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != NOT_AVAILABLE)
}

fn or_not_available(value: Option<String>) -> String {
    normalize(value).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_truncated_to_five() {
        let facts = MovieFacts {
            cast: ["A", "B", "C", "D", "E", "F", "G"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..Default::default()
        };
        let metadata = MovieMetadata::from_facts(facts, "x");
        assert_eq!(metadata.main_cast(), "A, B, C, D, E");
    }

    #[test]
    fn test_blank_fields_become_not_available() {
        let facts = MovieFacts {
            title: Some("  ".into()),
            year: Some(String::new()),
            imdb_rating: Some("N/A".into()),
            cast: vec![" ".into()],
            genre: None,
            plot: Some("\n".into()),
        };
        let metadata = MovieMetadata::from_facts(facts, "Fallback Title");
        assert_eq!(metadata.title(), "Fallback Title");
        assert_eq!(metadata.year(), NOT_AVAILABLE);
        assert_eq!(metadata.imdb_rating(), NOT_AVAILABLE);
        assert_eq!(metadata.main_cast(), NOT_AVAILABLE);
        assert_eq!(metadata.genre(), NOT_AVAILABLE);
        assert!(!metadata.has_plot());
        assert!(metadata.found());
        assert_eq!(metadata.error(), None);
    }

    #[test]
    fn test_not_found_always_carries_error() {
        let metadata = MovieMetadata::not_found("", "   ");
        assert!(!metadata.found());
        assert_eq!(metadata.title(), NOT_AVAILABLE);
        assert_eq!(metadata.error(), Some("Movie not found"));
        assert_eq!(metadata.plot_summary(), NOT_AVAILABLE);
    }
}
