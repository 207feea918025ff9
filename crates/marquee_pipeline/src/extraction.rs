//! Utilities for pulling structured data out of model output.
//!
//! Models often wrap JSON in markdown code fences or surround it with prose.
//! Every JSON parse of model output goes through [`extract_structured_text`]
//! first.

use marquee_error::{JsonError, MarqueeResult};

const FENCE: &str = "```";

/// Return the interior of the first fenced block, or the whole input.
///
/// A fence may carry a language tag (```` ```json ````), which is dropped. A
/// missing closing fence is treated as a truncated response and everything
/// after the opening fence is returned. Without any fence the input is returned
/// trimmed, so plain JSON passes through unchanged.
///
/// # Examples
///
/// ```
/// use marquee_pipeline::extract_structured_text;
///
/// assert_eq!(extract_structured_text("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(extract_structured_text("{\"a\":1}"), "{\"a\":1}");
/// assert_eq!(extract_structured_text("  just prose  "), "just prose");
/// ```
pub fn extract_structured_text(raw: &str) -> String {
    match fenced_interior(raw) {
        Some(interior) => interior.trim().to_string(),
        None => raw.trim().to_string(),
    }
}

fn fenced_interior(raw: &str) -> Option<&str> {
    let start = raw.find(FENCE)?;
    let after_fence = &raw[start + FENCE.len()..];

    // Skip a language tag only when it sits alone on the fence line
    let content = match after_fence.find('\n') {
        Some(newline) if is_fence_tag(&after_fence[..newline]) => &after_fence[newline + 1..],
        _ => after_fence,
    };

    match content.find(FENCE) {
        Some(end) => Some(&content[..end]),
        None => Some(content),
    }
}

fn is_fence_tag(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
}

/// Parse model output as JSON into `T`.
///
/// The output is passed through [`extract_structured_text`] first. If that
/// still does not parse, the first balanced `{ ... }` object in the raw output
/// is tried before giving up.
///
/// # Errors
///
/// Returns a [`JsonError`] if no candidate parses into `T`.
///
/// # Examples
///
/// ```
/// use marquee_pipeline::parse_model_json;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Movie {
///     title: String,
/// }
///
/// let raw = "Sure! Here it is:\n```json\n{\"title\": \"Inception\"}\n```";
/// let movie: Movie = parse_model_json(raw).unwrap();
/// assert_eq!(movie.title, "Inception");
/// ```
pub fn parse_model_json<T>(raw: &str) -> MarqueeResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let extracted = extract_structured_text(raw);
    let first_error = match serde_json::from_str(&extracted) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    if let Some(object) = extract_balanced(raw, '{', '}') {
        if let Ok(value) = serde_json::from_str(object) {
            tracing::debug!("Parsed JSON from balanced braces after fence extraction failed");
            return Ok(value);
        }
    }

    let preview = extracted.chars().take(100).collect::<String>();
    tracing::error!(
        error = %first_error,
        json_preview = %preview,
        "JSON parsing failed"
    );

    Err(JsonError::new(format!(
        "Failed to parse model output as JSON: {} (output: {}...)",
        first_error, preview
    ))
    .into())
}

/// Extract content between balanced delimiters.
///
/// Finds the first occurrence of `open` and returns the slice up to the
/// matching `close`, ignoring delimiters inside string literals.
fn extract_balanced(response: &str, open: char, close: char) -> Option<&str> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&response[start..start + i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
