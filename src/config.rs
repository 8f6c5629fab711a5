use crate::core::RecommenderConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Radii, limits and index size for the engine
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_recommendation_radius_km")]
    pub recommendation_radius_km: f64,
    #[serde(default = "default_alert_radius_km")]
    pub alert_radius_km: f64,
    #[serde(default = "default_listing_radius_km")]
    pub listing_radius_km: f64,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default = "default_max_features")]
    pub max_features: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            recommendation_radius_km: default_recommendation_radius_km(),
            alert_radius_km: default_alert_radius_km(),
            listing_radius_km: default_listing_radius_km(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_features: default_max_features(),
        }
    }
}

impl EngineSettings {
    pub fn recommender_config(&self) -> RecommenderConfig {
        RecommenderConfig {
            max_distance_km: self.recommendation_radius_km,
            default_limit: self.default_limit,
            max_features: self.max_features,
        }
    }
}

fn default_recommendation_radius_km() -> f64 { 10.0 }
fn default_alert_radius_km() -> f64 { 5.0 }
fn default_listing_radius_km() -> f64 { 10.0 }
fn default_limit() -> usize { 5 }
fn default_max_limit() -> usize { 50 }
fn default_max_features() -> usize { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_entries")]
    pub max_entries: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: default_cache_entries(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_entries() -> u64 { 64 }
fn default_cache_ttl() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Build the log subscriber for a format name: "json", "pretty", anything else is compact text
pub fn log_subscriber<W>(format: &str, filter: EnvFilter, writer: W) -> Box<dyn tracing::Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .with_level(true);

    match format {
        "pretty" => Box::new(builder.pretty().finish()),
        "json" => Box::new(builder.json().finish()),
        _ => Box::new(builder.finish()),
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FOODSHARE)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FOODSHARE__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("FOODSHARE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
