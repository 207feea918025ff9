//! Layered configuration and credentials.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use marquee_error::{
    BuilderError, ConfigError, MarqueeError, MarqueeResult, ProviderError, ProviderErrorKind,
};
use marquee_models::{OMDB_API_KEY_VAR, OPENAI_API_KEY_VAR};
use marquee_pipeline::PipelineSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../marquee.toml");

/// Where movie metadata comes from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MetadataSource {
    /// OMDb title lookup over HTTP
    #[default]
    Api,
    /// The language model fabricates the record
    Simulated,
}

/// Runtime configuration for the marquee binary.
///
/// Sources, later ones winning:
/// 1. Bundled defaults (`marquee.toml` shipped with the crate)
/// 2. `~/.config/marquee/marquee.toml`
/// 3. `./marquee.toml`
/// 4. `MARQUEE_*` environment variables, e.g. `MARQUEE_OUTPUT_DIR`
///
/// Credentials are never read from these files; see [`Credentials`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MarqueeConfig {
    /// Directory output files are written to
    output_dir: PathBuf,
    /// Metadata backend
    metadata_source: MetadataSource,
    /// Chat model identifier
    model: String,
    /// Chat completions endpoint root
    model_base_url: String,
    /// Metadata API endpoint
    metadata_base_url: String,
    /// Deadline for every provider call
    request_timeout_secs: u64,
    /// Title used when none is given
    default_title: String,
    /// Minimum plot length worth deriving a theme from
    min_plot_chars: usize,
}

impl MarqueeConfig {
    /// Load configuration from every layer.
    ///
    /// Missing optional files are skipped.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a present file or variable cannot be
    /// parsed, or when a value is out of range.
    #[instrument]
    pub fn load() -> MarqueeResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/marquee/marquee.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("marquee").required(false))
            .add_source(Environment::with_prefix("MARQUEE"));

        Self::finish(builder)
    }

    /// Load the bundled defaults overlaid with one file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file is missing or invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MarqueeResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(Self::defaults().add_source(File::from(path.as_ref())))
    }

    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file is broken.
    pub fn bundled() -> MarqueeResult<Self> {
        Self::finish(Self::defaults())
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> MarqueeResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                MarqueeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MarqueeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> MarqueeResult<()> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::new("request_timeout_secs must be at least 1").into());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::new("output_dir cannot be empty").into());
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::new("model cannot be empty").into());
        }
        Ok(())
    }

    /// Pipeline settings derived from this configuration.
    ///
    /// # Errors
    ///
    /// Returns a builder error if the settings cannot be assembled.
    pub fn pipeline_settings(&self) -> MarqueeResult<PipelineSettings> {
        PipelineSettings::builder()
            .output_dir(self.output_dir.clone())
            .min_plot_chars(self.min_plot_chars)
            .call_timeout_secs(Some(self.request_timeout_secs))
            .build()
            .map_err(|e| BuilderError::from(e.to_string()).into())
    }
}

/// Provider credentials, read from the environment only.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    openai_api_key: String,
    omdb_api_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &"<redacted>")
            .field("omdb_api_key", &self.omdb_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Credentials {
    /// Read credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ProviderErrorKind::MissingApiKey` naming the first required
    /// variable that is unset or blank.
    pub fn from_env(source: MetadataSource) -> MarqueeResult<Self> {
        Self::resolve(source, |var| std::env::var(var).ok())
    }

    /// Resolve credentials through `lookup`.
    ///
    /// The model key is always required; the metadata key only for
    /// [`MetadataSource::Api`].
    ///
    /// # Errors
    ///
    /// Returns `ProviderErrorKind::MissingApiKey` for a missing required key.
    pub fn resolve<F>(source: MetadataSource, lookup: F) -> MarqueeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> MarqueeResult<String> {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    ProviderError::new(ProviderErrorKind::MissingApiKey(var.to_string())).into()
                })
        };

        let openai_api_key = required(OPENAI_API_KEY_VAR)?;
        let omdb_api_key = match source {
            MetadataSource::Api => Some(required(OMDB_API_KEY_VAR)?),
            MetadataSource::Simulated => None,
        };

        Ok(Self {
            openai_api_key,
            omdb_api_key,
        })
    }

    /// Key for the chat completions provider.
    pub fn openai_api_key(&self) -> &str {
        &self.openai_api_key
    }

    /// Key for the metadata API, when that source is in use.
    pub fn omdb_api_key(&self) -> Option<&str> {
        self.omdb_api_key.as_deref()
    }
}
