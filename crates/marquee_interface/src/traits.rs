//! Trait definitions for external providers.

use crate::LookupOutcome;
use async_trait::async_trait;
use marquee_core::{CompletionRequest, CompletionResponse};
use marquee_error::MarqueeResult;

/// A backend that turns a prompt into free-form text.
///
/// Implementations fail with a provider error on transport, authentication,
/// or quota problems. They never retry; the calling stage decides whether a
/// failure is fatal.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Complete the request.
    async fn complete(&self, req: &CompletionRequest) -> MarqueeResult<CompletionResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// A backend that resolves a title to movie facts.
///
/// A title with no match is `Ok(LookupOutcome::NotFound(..))`, distinct from
/// `Err(..)`, which signals that the lookup itself failed.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Look up the title.
    async fn lookup(&self, title: &str) -> MarqueeResult<LookupOutcome>;

    /// Provider name (e.g., "omdb").
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<T: LanguageModel + ?Sized> LanguageModel for std::sync::Arc<T> {
    async fn complete(&self, req: &CompletionRequest) -> MarqueeResult<CompletionResponse> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: MetadataProvider + ?Sized> MetadataProvider for std::sync::Arc<T> {
    async fn lookup(&self, title: &str) -> MarqueeResult<LookupOutcome> {
        (**self).lookup(title).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
