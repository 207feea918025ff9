//! HTTP provider integrations for marquee.
//!
//! - [`OpenAiClient`] implements [`LanguageModel`](marquee_interface::LanguageModel)
//!   against any OpenAI-compatible chat completions endpoint.
//! - [`OmdbClient`] implements [`MetadataProvider`](marquee_interface::MetadataProvider)
//!   against the OMDb title lookup API.
//!
//! Every request carries a deadline; expiry surfaces as
//! `ProviderErrorKind::Timeout`.
//!
//! ```no_run
//! use marquee_models::OpenAiClient;
//! use marquee_interface::LanguageModel;
//! use marquee_core::CompletionRequest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::from_env("gpt-4o-mini")?;
//! let request = CompletionRequest::from_prompt("You are a film archivist.", "inceptio");
//! let response = client.complete(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod omdb;
mod openai;

pub use http::DEFAULT_TIMEOUT_SECS;
pub use omdb::{OMDB_API_KEY_VAR, OmdbClient};
pub use openai::{OPENAI_API_KEY_VAR, OpenAiClient};
