//! Client configuration management.
//!
//! This module handles loading and saving the client configuration,
//! which covers the API base URL and the per-request timeout.
//!
//! Configuration is stored at `~/.config/postboard/config.json` and can
//! be overridden through the `POSTBOARD_BASE_URL` and
//! `POSTBOARD_TIMEOUT_MS` environment variables (a `.env` file is
//! honored if present).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application name used for the config directory path
const APP_NAME: &str = "postboard";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default API base URL (the backend serves under `/api`)
const DEFAULT_BASE_URL: &str = "http://localhost:8088/api";

/// Default per-request timeout in milliseconds.
/// One deliberate value for every request; 5s tolerates a slow backend
/// (the AI summary endpoint in particular) while still failing fast.
const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Load configuration: file if present, then environment overrides.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if not found)
        let _ = dotenvy::dotenv();

        let mut config = Self::load_file()?.unwrap_or_default();

        if let Ok(base_url) = std::env::var("POSTBOARD_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("POSTBOARD_TIMEOUT_MS") {
            match timeout.parse::<u64>() {
                Ok(ms) => config.timeout_ms = ms,
                Err(_) => warn!(value = %timeout, "Ignoring unparseable POSTBOARD_TIMEOUT_MS"),
            }
        }

        Ok(config)
    }

    fn load_file() -> Result<Option<Self>> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(Some(serde_json::from_str(&contents)?))
        } else {
            Ok(None)
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// The per-request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
