//! Metadata provider that asks a language model to play the metadata API.

use crate::{parse_model_json, prompts};
use async_trait::async_trait;
use marquee_core::MovieFacts;
use marquee_error::MarqueeResult;
use marquee_interface::{LanguageModel, LookupOutcome, MetadataProvider};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{debug, instrument};

/// Shape the model is asked to emit.
///
/// Models are loose with types (years as numbers, cast as one string), so
/// scalar fields are read as arbitrary JSON and coerced.
#[derive(Debug, Deserialize)]
struct SimulatedResponse {
    #[serde(default = "default_found")]
    found: bool,
    #[serde(default)]
    title: Option<JsonValue>,
    #[serde(default)]
    year: Option<JsonValue>,
    #[serde(default, alias = "imdbRating")]
    imdb_rating: Option<JsonValue>,
    #[serde(default, alias = "mainCast")]
    main_cast: Option<JsonValue>,
    #[serde(default)]
    genre: Option<JsonValue>,
    #[serde(default, alias = "plotSummary", alias = "plot")]
    plot_summary: Option<JsonValue>,
    #[serde(default)]
    error: Option<String>,
}

fn default_found() -> bool {
    true
}

fn scalar_text(value: Option<JsonValue>) -> Option<String> {
    match value? {
        JsonValue::String(s) => Some(s),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn cast_names(value: Option<JsonValue>) -> Vec<String> {
    match value {
        Some(JsonValue::Array(items)) => items
            .into_iter()
            .filter_map(|item| scalar_text(Some(item)))
            .collect(),
        Some(JsonValue::String(joined)) => joined
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

impl SimulatedResponse {
    fn into_outcome(self) -> LookupOutcome {
        if !self.found {
            return LookupOutcome::NotFound(
                self.error
                    .unwrap_or_else(|| "Movie not found".to_string()),
            );
        }

        LookupOutcome::Found(MovieFacts {
            title: scalar_text(self.title),
            year: scalar_text(self.year),
            imdb_rating: scalar_text(self.imdb_rating),
            cast: cast_names(self.main_cast),
            genre: scalar_text(self.genre),
            plot: scalar_text(self.plot_summary),
        })
    }
}

/// Fabricates metadata with a language model instead of calling a real API.
///
/// Model failures and unparseable output are returned as errors, exactly like
/// transport failures from a real provider.
pub struct SimulatedMetadataProvider<L> {
    model: L,
}

impl<L: LanguageModel> SimulatedMetadataProvider<L> {
    /// Simulate lookups with `model`.
    pub fn new(model: L) -> Self {
        Self { model }
    }
}

#[async_trait]
impl<L: LanguageModel> MetadataProvider for SimulatedMetadataProvider<L> {
    #[instrument(skip(self), fields(provider = "simulated", model = %self.model.model_name()))]
    async fn lookup(&self, title: &str) -> MarqueeResult<LookupOutcome> {
        let response = self
            .model
            .complete(&prompts::metadata_simulation(title))
            .await?;
        debug!(response_length = response.text.len(), "Received simulated metadata");

        let parsed: SimulatedResponse = parse_model_json(&response.text)?;
        let outcome = parsed.into_outcome();
        debug!(found = outcome.is_found(), "Parsed simulated metadata");
        Ok(outcome)
    }

    fn provider_name(&self) -> &'static str {
        "simulated"
    }
}
