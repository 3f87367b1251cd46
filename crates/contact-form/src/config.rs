// File: src/config.rs
// Purpose: Controller configuration (webhook endpoint, feedback timing)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Contact form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Endpoint that receives the POST
    #[serde(default = "default_webhook_url")]
    pub webhook_url: String,

    /// How long a response message stays visible (default: 5000)
    #[serde(default = "default_auto_hide_ms")]
    pub auto_hide_ms: u64,
}

fn default_webhook_url() -> String {
    "https://n8n.ujjwalsharma.tech/webhook/addPerson".to_string()
}

fn default_auto_hide_ms() -> u64 {
    5000
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            webhook_url: default_webhook_url(),
            auto_hide_ms: default_auto_hide_ms(),
        }
    }
}

impl FormConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig =
            toml::from_str(content).context("Failed to parse contact form config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Reject endpoints the transport could never reach
    pub fn validate(&self) -> Result<()> {
        let url = self.webhook_url.trim();
        if url.is_empty() {
            bail!("webhook_url must not be empty");
        }
        if !url.starts_with("https://") && !url.starts_with("http://") {
            bail!("webhook_url must be an http(s) URL, got {:?}", url);
        }
        Ok(())
    }

    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms)
    }
}
