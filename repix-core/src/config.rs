use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

/// Environment variable that overrides the configured service address.
pub const SERVICE_URL_ENV: &str = "REPIX_API_URL";

/// Client configuration: where the resize service lives.
///
/// Resolution order is the environment, then the user config file, then
/// the built-in default. A file that fails to parse falls back to the
/// default rather than failing startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub service_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:3000".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load from the environment, then the config file, then defaults.
    pub fn load() -> Self {
        if let Ok(service_url) = std::env::var(SERVICE_URL_ENV) {
            if !service_url.is_empty() {
                return Self { service_url };
            }
        }

        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(cause) => {
                    warn!(path = %path.display(), %cause, "ignoring unparseable config");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist to the user config file.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }

    /// The service address as a parsed URL.
    pub fn service_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.service_url)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("repix").join("config.json"))
    }
}
