//! Wire types for the OMDb title endpoint.

use marquee_core::MovieFacts;
use serde::Deserialize;

/// Response body for `?t=<title>` lookups.
///
/// OMDb signals "no match" in-band with `"Response": "False"` and an `Error`
/// message, using HTTP 200.
#[derive(Debug, Deserialize)]
pub(crate) struct OmdbTitleResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Actors", default)]
    pub actors: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
}

impl OmdbTitleResponse {
    pub fn is_match(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    pub fn into_facts(self) -> MovieFacts {
        let cast = self
            .actors
            .as_deref()
            .map(|actors| {
                actors
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        MovieFacts {
            title: self.title,
            year: self.year,
            imdb_rating: self.imdb_rating,
            cast,
            genre: self.genre,
            plot: self.plot,
        }
    }
}
