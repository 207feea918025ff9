//! Filename sanitization.

use regex::Regex;
use std::sync::LazyLock;

/// Longest stem `sanitize_filename` will produce.
pub const MAX_FILENAME_LEN: usize = 100;

/// Stem used when nothing usable survives sanitization.
pub const PLACEHOLDER_FILENAME: &str = "untitled_movie";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Valid whitespace regex"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_.\-]").expect("Valid character class regex"));
static DOT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("Valid dot run regex"));

const EDGE_CHARS: &[char] = &['_', '.', '-'];

/// Produce a filesystem-safe filename stem from arbitrary text.
///
/// The result matches `^[a-z0-9_.-]{1,100}$`. Whitespace runs become a single
/// underscore, other characters outside the set are dropped, dot runs collapse
/// to one dot, and separators at either end are trimmed. Input with nothing
/// left over maps to [`PLACEHOLDER_FILENAME`]. Never fails, and
/// `sanitize_filename(&sanitize_filename(x)) == sanitize_filename(x)`.
///
/// # Examples
///
/// ```
/// use marquee_pipeline::sanitize_filename;
///
/// assert_eq!(sanitize_filename("The Lord of the Rings: The Two Towers"), "the_lord_of_the_rings_the_two_towers");
/// assert_eq!(sanitize_filename("Amélie"), "amlie");
/// assert_eq!(sanitize_filename("   "), "untitled_movie");
/// ```
pub fn sanitize_filename(input: &str) -> String {
    let lowered = input.to_lowercase();
    let underscored = WHITESPACE.replace_all(lowered.trim(), "_");
    let filtered = DISALLOWED.replace_all(&underscored, "");
    let collapsed = DOT_RUNS.replace_all(&filtered, ".");

    let trimmed = collapsed.trim_matches(EDGE_CHARS);
    // Every remaining char is ASCII, so byte slicing is safe
    let truncated = &trimmed[..trimmed.len().min(MAX_FILENAME_LEN)];
    let result = truncated.trim_matches(EDGE_CHARS);

    if result.is_empty() {
        PLACEHOLDER_FILENAME.to_string()
    } else {
        result.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_safe(name: &str) -> bool {
        !name.is_empty()
            && name.len() <= MAX_FILENAME_LEN
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "_.-".contains(c))
    }

    #[test]
    fn test_simple_title() {
        assert_eq!(sanitize_filename("Inception"), "inception");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(sanitize_filename("The   Dark\tKnight\n"), "the_dark_knight");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(sanitize_filename("Se7en (1995)!"), "se7en_1995");
        assert_eq!(sanitize_filename("Mission: Impossible"), "mission_impossible");
    }

    #[test]
    fn test_dot_runs_collapse() {
        assert_eq!(sanitize_filename("What.. Ever...Happened"), "what._ever.happened");
    }

    #[test]
    fn test_empty_and_invalid_map_to_placeholder() {
        assert_eq!(sanitize_filename(""), PLACEHOLDER_FILENAME);
        assert_eq!(sanitize_filename("!!!"), PLACEHOLDER_FILENAME);
        assert_eq!(sanitize_filename("..."), PLACEHOLDER_FILENAME);
        assert_eq!(sanitize_filename("七人の侍"), PLACEHOLDER_FILENAME);
    }

    #[test]
    fn test_truncated_to_max_length() {
        let long = "a".repeat(250);
        let name = sanitize_filename(&long);
        assert_eq!(name.len(), MAX_FILENAME_LEN);
    }

    #[test]
    fn test_truncation_does_not_leave_trailing_separator() {
        let input = format!("{} tail", "b".repeat(MAX_FILENAME_LEN - 1));
        let name = sanitize_filename(&input);
        assert_eq!(name, "b".repeat(MAX_FILENAME_LEN - 1));
    }

    #[test]
    fn test_output_always_safe_and_idempotent() {
        let samples = [
            "Inception",
            "  leading and trailing  ",
            "Crouching Tiger, Hidden Dragon",
            "WALL·E",
            "a..b",
            "-_-",
            "Ünïcödé Tïtlé",
            "İstanbul",
            "x/y\\z:*?\"<>|",
            "",
            "..hidden.",
        ];
        for sample in samples {
            let once = sanitize_filename(sample);
            assert!(is_safe(&once), "unsafe output {once:?} for {sample:?}");
            assert_eq!(sanitize_filename(&once), once, "not idempotent for {sample:?}");
        }
    }
}
