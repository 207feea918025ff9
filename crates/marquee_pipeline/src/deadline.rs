//! Per-call deadlines for provider calls.
//!
//! HTTP clients already time out on their own; these wrappers put the same
//! bound on any provider, including simulated and in-process ones.

use async_trait::async_trait;
use marquee_core::{CompletionRequest, CompletionResponse};
use marquee_error::{MarqueeResult, ProviderError, ProviderErrorKind};
use marquee_interface::{LanguageModel, LookupOutcome, MetadataProvider};
use std::future::Future;
use std::time::Duration;

async fn within<T, F>(limit: Duration, call: F) -> MarqueeResult<T>
where
    F: Future<Output = MarqueeResult<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(seconds = limit.as_secs(), "Provider call exceeded its deadline");
            Err(ProviderError::new(ProviderErrorKind::Timeout {
                seconds: limit.as_secs(),
            })
            .into())
        }
    }
}

/// A language model whose calls fail with a timeout after `limit`.
pub struct DeadlineModel<L> {
    inner: L,
    limit: Duration,
}

impl<L: LanguageModel> DeadlineModel<L> {
    /// Bound every call on `inner` by `limit`.
    pub fn new(inner: L, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl<L: LanguageModel> LanguageModel for DeadlineModel<L> {
    async fn complete(&self, req: &CompletionRequest) -> MarqueeResult<CompletionResponse> {
        within(self.limit, self.inner.complete(req)).await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}

/// A metadata provider whose lookups fail with a timeout after `limit`.
pub struct DeadlineProvider<M> {
    inner: M,
    limit: Duration,
}

impl<M: MetadataProvider> DeadlineProvider<M> {
    /// Bound every lookup on `inner` by `limit`.
    pub fn new(inner: M, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl<M: MetadataProvider> MetadataProvider for DeadlineProvider<M> {
    async fn lookup(&self, title: &str) -> MarqueeResult<LookupOutcome> {
        within(self.limit, self.inner.lookup(title)).await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }
}
