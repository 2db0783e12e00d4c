//! Client configuration

use crate::ClientError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend address the site talks to when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Site API base URL, without the `/api` suffix
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            request_timeout_secs: 30,
            user_agent: concat!("deptsite/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_secs = timeout.as_secs().max(1);
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Base URL with trailing slashes removed
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check the base URL is an absolute http(s) URL and the timeout is non-zero
    pub fn validate(&self) -> Result<(), ClientError> {
        let url = url::Url::parse(self.normalized_base_url())
            .map_err(|e| ClientError::Config(format!("invalid base URL {:?}: {}", self.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "unsupported URL scheme {:?}, expected http or https",
                url.scheme()
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ClientError::Config("request timeout must be at least 1 second".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ClientConfig::new("https://dept.example.edu//");
        assert_eq!(config.normalized_base_url(), "https://dept.example.edu");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            ClientConfig::new("not a url").validate(),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("ftp://dept.example.edu").validate(),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = ClientConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "base_url": "https://dept.example.edu" }"#).unwrap();
        assert_eq!(config.base_url, "https://dept.example.edu");
        assert_eq!(config.request_timeout_secs, 30);
    }
}
