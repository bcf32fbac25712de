use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// The file path comes from `INVOICER_CONFIG`, falling back to `config.toml`.
    /// A missing file is not an error.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("INVOICER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        Self::from_sources(Some(Path::new(&config_path)), true)
    }

    /// Build configuration from an optional file and, when `with_env` is set,
    /// `INVOICER_*` environment variables layered on top.
    pub fn from_sources(config_path: Option<&Path>, with_env: bool) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = config_path {
            if path.exists() {
                builder = builder.add_source(config::File::from(PathBuf::from(path)));
            }
        }

        if with_env {
            builder = builder.add_source(
                config::Environment::with_prefix("INVOICER")
                    .separator("_")
                    .try_parsing(true),
            );
        }

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("server.host must be specified");
        }
        Ok(())
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
