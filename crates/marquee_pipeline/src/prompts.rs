//! Prompt text for each model-backed stage.

use marquee_core::{CompletionRequest, MovieMetadata};

/// Suffix the title refinement model appends when it is unsure.
pub const UNCERTAIN_MARKER: &str = "[UNCERTAIN]";

const TITLE_INSTRUCTION: &str = "You are a film title expert. The user gives you a movie title \
that may be misspelled, abbreviated, translated, or known by a regional name. Respond with the \
single most likely official English release title and nothing else: no quotes, no year, no \
explanation. If you cannot confidently identify one specific film, respond with your best guess \
followed by a space and [UNCERTAIN].";

const SIMULATION_INSTRUCTION: &str = "You are a movie database API. Given a movie title, respond \
ONLY with a JSON object of this exact shape:\n\
{\"found\": true, \"title\": \"...\", \"year\": \"...\", \"imdb_rating\": \"...\", \
\"main_cast\": [\"...\"], \"genre\": \"...\", \"plot_summary\": \"...\", \"error\": null}\n\
Use \"N/A\" for any value you do not know. If no such movie exists, respond with \
{\"found\": false, \"error\": \"<short reason>\"}. Output ONLY valid JSON.";

const THEME_INSTRUCTION: &str = "You are a film critic. In one or two sentences, state the \
central theme of the movie described by the user. Respond with the theme only.";

/// Request asking the model to normalize a raw title.
pub fn title_refinement(raw_title: &str) -> CompletionRequest {
    CompletionRequest::from_prompt(TITLE_INSTRUCTION, format!("Movie title: {}", raw_title))
        .with_temperature(0.0)
        .with_max_tokens(64)
}

/// Request asking the model to act as a metadata API.
pub fn metadata_simulation(title: &str) -> CompletionRequest {
    CompletionRequest::from_prompt(SIMULATION_INSTRUCTION, format!("Movie title: {}", title))
        .with_temperature(0.2)
        .with_max_tokens(600)
}

/// Request asking the model for a short thematic summary.
pub fn theme_derivation(metadata: &MovieMetadata) -> CompletionRequest {
    CompletionRequest::from_prompt(
        THEME_INSTRUCTION,
        format!(
            "Title: {}\nGenre: {}\nPlot: {}",
            metadata.title(),
            metadata.genre(),
            metadata.plot_summary()
        ),
    )
    .with_temperature(0.7)
    .with_max_tokens(160)
}
