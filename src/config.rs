use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use tokio::fs;

use crate::scheduler::DEFAULT_DEADLINE;
use crate::source::DEFAULT_SERVERS_URL;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProbeConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_servers_url")]
    pub servers_url: String,
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_servers_url() -> String {
    DEFAULT_SERVERS_URL.to_string()
}

fn default_deadline_ms() -> u64 {
    DEFAULT_DEADLINE.as_millis() as u64
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            servers_url: default_servers_url(),
            deadline_ms: default_deadline_ms(),
        }
    }
}

impl ProbeConfig {
    /// Reads the JSON file named by `FIND_GATEWAY_CONFIG`, or falls back to defaults when the
    /// variable is unset.
    pub async fn load() -> Result<Self> {
        match std::env::var("FIND_GATEWAY_CONFIG") {
            Ok(path) => Self::load_file(&path).await,
            Err(_) => Ok(Self::default()),
        }
    }

    pub async fn load_file(file_path: &str) -> Result<Self> {
        if !Path::new(file_path).exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", file_path));
        }

        let content = fs::read_to_string(file_path).await?;
        let config: ProbeConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config file {}", file_path))?;
        config.validate_log_level()?;
        Ok(config)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    /// Get the log level as a tracing::Level
    pub fn get_tracing_level(&self) -> Result<tracing::Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(tracing::Level::TRACE),
            "debug" => Ok(tracing::Level::DEBUG),
            "info" => Ok(tracing::Level::INFO),
            "warn" | "warning" => Ok(tracing::Level::WARN),
            "error" => Ok(tracing::Level::ERROR),
            _ => Err(anyhow::anyhow!(
                "Invalid log level: {}. Valid levels are: trace, debug, info, warn, error",
                self.log_level
            )),
        }
    }

    /// Validate the log level is one of the supported values
    pub fn validate_log_level(&self) -> Result<()> {
        self.get_tracing_level().map(|_| ())
    }
}
