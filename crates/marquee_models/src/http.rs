//! Shared HTTP plumbing for provider clients.

use marquee_error::{MarqueeResult, ProviderError, ProviderErrorKind};
use std::time::Duration;

/// Per-request deadline used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Build a reqwest client whose requests give up after `timeout_secs`.
pub(crate) fn build_client(timeout_secs: u64) -> MarqueeResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::Transport(format!(
                "Failed to create HTTP client: {}",
                e
            )))
            .into()
        })
}

/// Classify a reqwest failure.
pub(crate) fn classify(error: reqwest::Error, timeout_secs: u64) -> ProviderError {
    if error.is_timeout() {
        ProviderError::new(ProviderErrorKind::Timeout {
            seconds: timeout_secs,
        })
    } else if error.is_decode() {
        ProviderError::new(ProviderErrorKind::ResponseParse(error.to_string()))
    } else if let Some(status) = error.status() {
        ProviderError::new(ProviderErrorKind::HttpStatus {
            status_code: status.as_u16(),
            message: error.to_string(),
        })
    } else {
        ProviderError::new(ProviderErrorKind::Transport(error.to_string()))
    }
}

/// Read a credential from the environment.
pub(crate) fn api_key_from_env(var: &str) -> MarqueeResult<String> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ProviderError::new(ProviderErrorKind::MissingApiKey(var.to_string())).into()),
    }
}

/// Turn a non-success response into an `HttpStatus` error, keeping a body preview.
pub(crate) async fn error_for_status(response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let preview: String = body.chars().take(200).collect();
    ProviderError::new(ProviderErrorKind::HttpStatus {
        status_code: status.as_u16(),
        message: preview,
    })
}
