//! Wiring configuration into a ready-to-run executor.

use crate::config::{Credentials, MarqueeConfig, MetadataSource};
use marquee_error::{ConfigError, MarqueeResult};
use marquee_interface::{LanguageModel, MetadataProvider};
use marquee_models::{OMDB_API_KEY_VAR, OmdbClient, OpenAiClient};
use marquee_pipeline::{PipelineExecutor, SimulatedMetadataProvider};
use marquee_storage::FileSystemOutput;
use std::sync::Arc;
use tracing::{info, instrument};

/// Build the executor described by `config`.
///
/// Constructs HTTP clients but makes no requests.
///
/// # Errors
///
/// Fails if an HTTP client cannot be built or the API source has no key.
#[instrument(skip_all, fields(source = %config.metadata_source(), model = %config.model()))]
pub fn build_executor(
    config: &MarqueeConfig,
    credentials: &Credentials,
) -> MarqueeResult<PipelineExecutor> {
    let timeout = *config.request_timeout_secs();

    let model = Arc::new(
        OpenAiClient::with_api_key(credentials.openai_api_key(), config.model().as_str())?
            .with_base_url(config.model_base_url().as_str())
            .with_timeout(timeout)?,
    );

    let metadata: Arc<dyn MetadataProvider> = match config.metadata_source() {
        MetadataSource::Api => {
            let key = credentials.omdb_api_key().ok_or_else(|| {
                ConfigError::new(format!(
                    "metadata_source is 'api' but {} was not resolved",
                    OMDB_API_KEY_VAR
                ))
            })?;
            Arc::new(
                OmdbClient::with_api_key(key)?
                    .with_base_url(config.metadata_base_url().as_str())
                    .with_timeout(timeout)?,
            )
        }
        MetadataSource::Simulated => Arc::new(SimulatedMetadataProvider::new(model.clone())),
    };

    info!(
        provider = metadata.provider_name(),
        model = model.model_name(),
        "Providers ready"
    );

    Ok(PipelineExecutor::new(
        model,
        metadata,
        Arc::new(FileSystemOutput::new()),
        config.pipeline_settings()?,
    ))
}
