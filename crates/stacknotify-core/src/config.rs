use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
///
/// Loaded from the config file with CLI flags layered on top.
/// Priority: CLI > File > Defaults (like a sensible person would do)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tags to be notified about; empty means notify about everything
    #[serde(default)]
    pub tracked_tags: Vec<String>,

    /// How many surfaced questions to keep in the recency window
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Seconds between poll cycles
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default)]
    pub api: ApiConfig,
}

fn default_limit() -> usize {
    crate::QuestionTracker::DEFAULT_LIMIT
}

fn default_poll_interval_secs() -> u64 {
    crate::Watcher::DEFAULT_INTERVAL.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracked_tags: Vec::new(),
            limit: default_limit(),
            poll_interval_secs: default_poll_interval_secs(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    /// when no file exists yet.
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)
                .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, contents)?;
        Ok(())
    }

    /// Config file path: XDG on Linux/macOS, AppData on Windows
    fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::Config("Could not find config directory".into()))?
            .join("stacknotify");

        Ok(config_dir.join("config.toml"))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Questions API endpoint
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Batch size per fetch; the service caps this at 100
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_api_base_url() -> String {
    "https://api.stackoverflow.com/1.1".to_string()
}

fn default_page_size() -> u32 {
    100
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            page_size: default_page_size(),
        }
    }
}
