use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::platform;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub simulate: SimulateConfig,
}

/// Where the daemon serves the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the client polls from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Built-in demo producer: appends a random sample record on an interval
/// so the client can be tried without a real log source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_simulate_interval")]
    pub interval_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: default_simulate_interval(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8791
}

fn default_base_url() -> String {
    "http://127.0.0.1:8791".to_string()
}

fn default_simulate_interval() -> u64 {
    2
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.bind_address, "127.0.0.1");
        assert_eq!(config.http.port, 8791);
        assert!(config.feed.base_url.starts_with("http://"));
        assert!(!config.simulate.enabled);
        assert_eq!(config.simulate.interval_secs, 2);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("[feed]\nbase_url = \"http://10.0.0.5:9000\"\n").unwrap();
        assert_eq!(config.feed.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.http.port, 8791);
    }
}
