//! Chat completions client implementation.

use super::dto::{ChatRequest, ChatResponse};
use crate::http::{DEFAULT_TIMEOUT_SECS, api_key_from_env, build_client, classify, error_for_status};
use async_trait::async_trait;
use marquee_core::{CompletionRequest, CompletionResponse};
use marquee_error::{MarqueeResult, ProviderError, ProviderErrorKind};
use marquee_interface::LanguageModel;
use tracing::{debug, instrument};

/// Environment variable holding the model provider credential.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Language model client for OpenAI-compatible chat completions APIs.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Creates a client reading the key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderErrorKind::MissingApiKey` if the variable is unset or blank.
    #[instrument(skip_all, fields(model = %model))]
    pub fn from_env(model: &str) -> MarqueeResult<Self> {
        let api_key = api_key_from_env(OPENAI_API_KEY_VAR)?;
        Self::with_api_key(api_key, model)
    }

    /// Creates a client with an explicit key.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> MarqueeResult<Self> {
        Ok(Self {
            http: build_client(DEFAULT_TIMEOUT_SECS)?,
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Point the client at another OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
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

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn complete(&self, req: &CompletionRequest) -> MarqueeResult<CompletionResponse> {
        let body = ChatRequest::from_request(&self.model, req);

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| classify(e, self.timeout_secs))?;

        if !response.status().is_success() {
            return Err(error_for_status(response).await.into());
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| classify(e, self.timeout_secs))?;

        // A choice with null content is an empty completion, not a failure
        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyResponse))?;

        debug!(response_length = text.len(), "Received completion");
        Ok(CompletionResponse::new(text))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
