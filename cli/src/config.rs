//! CLI Configuration
//!
//! Profiles live in `~/.deptsite/config.toml` and `~/.deptsite/config.<profile>.toml`.

use crate::output::OutputFormat;
use anyhow::{anyhow, bail, Context, Result};
use deptsite_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Keys accepted by `config get` and `config set`
pub const KEYS: [&str; 4] = ["api_url", "timeout_secs", "default_format", "log_level"];

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub default_format: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load(profile: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::config_path(profile)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Write the profile file, returning where it went
    pub fn save(&self, profile: Option<&str>) -> Result<PathBuf> {
        let path = Self::config_path(profile)?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("cannot write {}", path.display()))
    }

    pub fn config_path(profile: Option<&str>) -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Cannot find home directory"))?;
        let filename = match profile {
            Some(p) => format!("config.{p}.toml"),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".deptsite").join(filename))
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "api_url" => self.api_url.clone(),
            "timeout_secs" => self.timeout_secs.map(|t| t.to_string()),
            "default_format" => self.default_format.clone(),
            "log_level" => self.log_level.clone(),
            _ => bail!("Unknown config key: {key} (expected one of {})", KEYS.join(", ")),
        };
        Ok(value)
    }

    /// Set a key from its command-line text, rejecting values that would not load
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => {
                ClientConfig::new(value).validate()?;
                self.api_url = Some(value.to_string());
            }
            "timeout_secs" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| anyhow!("timeout_secs must be a whole number of seconds"))?;
                if secs == 0 {
                    bail!("timeout_secs must be greater than zero");
                }
                self.timeout_secs = Some(secs);
            }
            "default_format" => {
                if OutputFormat::parse(value).is_none() {
                    bail!("default_format must be one of table, json, yaml");
                }
                self.default_format = Some(value.to_lowercase());
            }
            "log_level" => self.log_level = Some(value.to_string()),
            _ => bail!("Unknown config key: {key} (expected one of {})", KEYS.join(", ")),
        }
        Ok(())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.default_format.as_deref().and_then(OutputFormat::parse)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Library settings with command-line overrides applied on top of the profile
    pub fn client_config(&self, api_url: Option<&str>, timeout_secs: Option<u64>) -> ClientConfig {
        let mut config = match api_url.or(self.api_url.as_deref()) {
            Some(url) => ClientConfig::new(url),
            None => ClientConfig::default(),
        };
        if let Some(secs) = timeout_secs.or(self.timeout_secs) {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_keys() {
        let mut config = Config::default();
        config.set("api_url", "https://cs.college.edu").unwrap();
        config.set("timeout_secs", "15").unwrap();
        config.set("default_format", "JSON").unwrap();
        config.set("log_level", "debug").unwrap();

        assert_eq!(config.get("api_url").unwrap().as_deref(), Some("https://cs.college.edu"));
        assert_eq!(config.get("timeout_secs").unwrap().as_deref(), Some("15"));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("api_url", "ftp://cs.college.edu").is_err());
        assert!(config.set("timeout_secs", "0").is_err());
        assert!(config.set("timeout_secs", "soon").is_err());
        assert!(config.set("default_format", "xml").is_err());
        assert!(config.set("api_key", "x").is_err());
        assert!(config.get("tenant").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override_profile() {
        let config = Config {
            api_url: Some("https://profile.example".into()),
            timeout_secs: Some(12),
            ..Config::default()
        };

        let from_profile = config.client_config(None, None);
        assert_eq!(from_profile.base_url, "https://profile.example");
        assert_eq!(from_profile.request_timeout(), Duration::from_secs(12));

        let overridden = config.client_config(Some("http://127.0.0.1:8080"), Some(3));
        assert_eq!(overridden.base_url, "http://127.0.0.1:8080");
        assert_eq!(overridden.request_timeout(), Duration::from_secs(3));

        let defaults = Config::default().client_config(None, None);
        assert_eq!(defaults, ClientConfig::default());
        assert_eq!(Config::default().log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles").join("config.toml");
        let mut config = Config::default();
        config.set("api_url", "http://localhost:5000").unwrap();
        config.set("timeout_secs", "5").unwrap();

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.staging.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
