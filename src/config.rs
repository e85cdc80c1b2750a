use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::profile::Profile;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub advisor: AdvisorConfig,
    pub metrics: MetricsConfig,
    /// Seed records for the in-memory profile store
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

/// Hosted chat agent behind the "AI advisor" feature
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub agent_id: String,
    pub api_key: String,
    pub timeout_seconds: u64,
    /// Chat sessions idle for longer than this are dropped
    pub session_idle_seconds: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: String::new(),
            agent_id: String::new(),
            api_key: String::new(),
            timeout_seconds: 30,
            session_idle_seconds: 1800,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/metrics".to_string(),
        }
    }
}

/// Load configuration from a TOML file (optional) overlaid with
/// `COST_ADVISOR__SECTION__KEY` environment variables.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("COST_ADVISOR")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("Server port must be greater than 0");
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}': expected 'text' or 'json'", other),
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("Metrics endpoint must start with '/'");
    }

    if cfg.advisor.enabled {
        let url = reqwest::Url::parse(&cfg.advisor.endpoint).map_err(|e| {
            anyhow::anyhow!("Advisor endpoint '{}' is not a valid URL: {}", cfg.advisor.endpoint, e)
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("Advisor endpoint must use http or https");
        }
        if cfg.advisor.agent_id.trim().is_empty() {
            anyhow::bail!("Advisor agent_id cannot be empty when the advisor is enabled");
        }
        if cfg.advisor.timeout_seconds == 0 {
            anyhow::bail!("Advisor timeout_seconds must be greater than 0");
        }
        if cfg.advisor.session_idle_seconds == 0 {
            anyhow::bail!("Advisor session_idle_seconds must be greater than 0");
        }
    }

    for profile in &cfg.profiles {
        if profile.id.trim().is_empty() {
            anyhow::bail!("Profile id cannot be empty");
        }
    }

    Ok(())
}
