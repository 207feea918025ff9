//! OMDb client implementation.

use super::dto::OmdbTitleResponse;
use crate::http::{DEFAULT_TIMEOUT_SECS, api_key_from_env, build_client, classify, error_for_status};
use async_trait::async_trait;
use marquee_error::MarqueeResult;
use marquee_interface::{LookupOutcome, MetadataProvider};
use tracing::{debug, instrument, warn};

/// Environment variable holding the metadata provider credential.
pub const OMDB_API_KEY_VAR: &str = "OMDB_API_KEY";

const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Metadata provider backed by the OMDb API.
#[derive(Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout_secs: u64,
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl OmdbClient {
    /// Creates a client reading the key from `OMDB_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderErrorKind::MissingApiKey` if the variable is unset or blank.
    pub fn from_env() -> MarqueeResult<Self> {
        let api_key = api_key_from_env(OMDB_API_KEY_VAR)?;
        Self::with_api_key(api_key)
    }

    /// Creates a client with an explicit key.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    pub fn with_api_key(api_key: impl Into<String>) -> MarqueeResult<Self> {
        Ok(Self {
            http: build_client(DEFAULT_TIMEOUT_SECS)?,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Use a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request deadline.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be rebuilt.
    pub fn with_timeout(mut self, timeout_secs: u64) -> MarqueeResult<Self> {
        self.http = build_client(timeout_secs)?;
        self.timeout_secs = timeout_secs;
        Ok(self)
    }
}

#[async_trait]
impl MetadataProvider for OmdbClient {
    #[instrument(skip(self), fields(provider = "omdb"))]
    async fn lookup(&self, title: &str) -> MarqueeResult<LookupOutcome> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("t", title), ("plot", "full"), ("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| classify(e, self.timeout_secs))?;

        if !response.status().is_success() {
            return Err(error_for_status(response).await.into());
        }

        let body: OmdbTitleResponse = response
            .json()
            .await
            .map_err(|e| classify(e, self.timeout_secs))?;

        if !body.is_match() {
            let reason = body
                .error
                .unwrap_or_else(|| "Movie not found!".to_string());
            warn!(reason = %reason, "OMDb has no match");
            return Ok(LookupOutcome::NotFound(reason));
        }

        debug!(matched_title = ?body.title, "OMDb match");
        Ok(LookupOutcome::Found(body.into_facts()))
    }

    fn provider_name(&self) -> &'static str {
        "omdb"
    }
}
