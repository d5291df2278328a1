use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub recommendation: RecommendationSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Gallery storefront backend the service fetches history and catalog from
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    pub default_limit: Option<u8>,
    pub max_limit: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_artist_base")]
    pub artist_base: f64,
    #[serde(default = "default_artist_step")]
    pub artist_step: f64,
    #[serde(default = "default_medium_base")]
    pub medium_base: f64,
    #[serde(default = "default_medium_step")]
    pub medium_step: f64,
    #[serde(default = "default_price_fit")]
    pub price_fit: f64,
    #[serde(default = "default_discovery")]
    pub discovery: f64,
    #[serde(default = "default_jitter")]
    pub jitter: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            artist_base: default_artist_base(),
            artist_step: default_artist_step(),
            medium_base: default_medium_base(),
            medium_step: default_medium_step(),
            price_fit: default_price_fit(),
            discovery: default_discovery(),
            jitter: default_jitter(),
        }
    }
}

fn default_artist_base() -> f64 { 50.0 }
fn default_artist_step() -> f64 { 10.0 }
fn default_medium_base() -> f64 { 20.0 }
fn default_medium_step() -> f64 { 5.0 }
fn default_price_fit() -> f64 { 15.0 }
fn default_discovery() -> f64 { 5.0 }
fn default_jitter() -> f64 { 10.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with GALLERY_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with GALLERY_)
            // e.g., GALLERY_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("GALLERY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("GALLERY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Substitute well-known environment variables into config values
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    // The backend URL is commonly provided as a bare env var in deployments;
    // we check GALLERY_BACKEND_URL first, then GALLERY_BACKEND__BASE_URL
    let backend_url = env::var("GALLERY_BACKEND_URL")
        .or_else(|_| env::var("GALLERY_BACKEND__BASE_URL"))
        .unwrap_or_else(|_| "http://localhost:5000".to_string());

    let api_key = env::var("GALLERY_API_KEY")
        .or_else(|_| env::var("GALLERY_BACKEND__API_KEY"))
        .ok();

    let mut builder = Config::builder()
        .add_source(settings)
        .set_override("backend.base_url", backend_url)?;

    if let Some(api_key) = api_key {
        builder = builder.set_override("backend.api_key", api_key)?;
    }

    builder.build()
}
