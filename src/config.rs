//! Client Configuration
//!
//! Defaults, a JSON file on disk and environment overrides, in that order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

pub const ENV_API_URL: &str = "CHEMISTTASKER_API_URL";
pub const ENV_ACCESS_TOKEN: &str = "CHEMISTTASKER_ACCESS_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "CHEMISTTASKER_TIMEOUT_SECS";
pub const ENV_CONFIG_FILE: &str = "CHEMISTTASKER_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: String,
    /// Bearer token sent with every request
    pub access_token: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            access_token: None,
            timeout_secs: 30,
            user_agent: format!("chemisttasker/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().with_env()
    }

    /// Overlay environment variables onto this config
    pub fn with_env(self) -> Result<Self> {
        self.with_vars(|key| std::env::var(key).ok())
    }

    fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = var(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(token) = var(ENV_ACCESS_TOKEN) {
            self.access_token = if token.is_empty() { None } else { Some(token) };
        }
        if let Some(secs) = var(ENV_TIMEOUT_SECS) {
            self.timeout_secs = secs
                .parse()
                .with_context(|| format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT_SECS, secs))?;
        }
        Ok(self)
    }
}

/// Loads and saves a [`ClientConfig`] as JSON
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the file, writing the defaults first if it does not exist
    pub async fn load(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            let default = ClientConfig::default();
            self.save(&default).await?;
            return Ok(default);
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(config)
    }

    pub async fn save(&self, config: &ClientConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
