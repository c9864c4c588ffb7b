// Client defaults plus env/YAML configuration overrides.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::time::Duration;

pub(crate) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub(crate) const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
// Matches the backend's own list-response cache window.
pub(crate) const DEFAULT_CACHE_TTL_MS: u64 = 30_000;

/// Runtime configuration for the portal client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin; the versioned `/api` path is appended per request.
    pub base_url: String,
    pub request_timeout: Duration,
    /// TTL applied to cached list responses.
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
struct ClientConfigOverride {
    base_url: Option<String>,
    request_timeout_ms: Option<u64>,
    cache_ttl_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            cache_ttl: Duration::from_millis(DEFAULT_CACHE_TTL_MS),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("ONEDESK_API_URL")
            && !value.trim().is_empty()
        {
            config.base_url = value;
        }
        if let Some(value) = read_u64_env("ONEDESK_REQUEST_TIMEOUT_MS") {
            config.request_timeout = Duration::from_millis(value);
        }
        if let Some(value) = read_u64_env("ONEDESK_CACHE_TTL_MS") {
            config.cache_ttl = Duration::from_millis(value);
        }
        config
    }

    /// Defaults, then env overrides, then an optional YAML override file
    /// (explicit path or `ONEDESK_CLIENT_CONFIG`).
    pub fn from_env_or_yaml(config_path: Option<&str>) -> Result<Self> {
        let mut config = Self::from_env();
        let override_path = config_path
            .map(|value| value.to_string())
            .or_else(|| std::env::var("ONEDESK_CLIENT_CONFIG").ok());
        if let Some(path) = override_path.as_deref() {
            let contents =
                fs::read_to_string(path).with_context(|| format!("read client config: {path}"))?;
            let override_cfg: ClientConfigOverride =
                serde_yaml::from_str(&contents).context("parse client config yaml")?;
            override_cfg.apply(&mut config);
        }
        Ok(config)
    }
}

impl ClientConfigOverride {
    fn apply(&self, config: &mut ClientConfig) {
        if let Some(value) = &self.base_url
            && !value.trim().is_empty()
        {
            config.base_url = value.clone();
        }
        if let Some(value) = self.request_timeout_ms
            && value > 0
        {
            config.request_timeout = Duration::from_millis(value);
        }
        if let Some(value) = self.cache_ttl_ms
            && value > 0
        {
            config.cache_ttl = Duration::from_millis(value);
        }
    }
}

fn read_u64_env(key: &str) -> Option<u64> {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "ONEDESK_API_URL",
            "ONEDESK_REQUEST_TIMEOUT_MS",
            "ONEDESK_CACHE_TTL_MS",
            "ONEDESK_CLIENT_CONFIG",
        ] {
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_without_env() {
        clear_env();
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.cache_ttl, Duration::from_millis(DEFAULT_CACHE_TTL_MS));
    }

    #[test]
    #[serial]
    fn env_overrides_beat_defaults() {
        clear_env();
        unsafe {
            std::env::set_var("ONEDESK_API_URL", "http://portal.internal:9000");
            std::env::set_var("ONEDESK_CACHE_TTL_MS", "5000");
        }
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://portal.internal:9000");
        assert_eq!(config.cache_ttl, Duration::from_millis(5000));
        clear_env();
    }

    #[test]
    #[serial]
    fn yaml_overrides_beat_env() {
        clear_env();
        unsafe { std::env::set_var("ONEDESK_API_URL", "http://from-env:9000") };
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("client.yaml");
        fs::write(&path, "base_url: http://from-yaml:9000\nrequest_timeout_ms: 2500\n")
            .expect("write override");
        let config =
            ClientConfig::from_env_or_yaml(path.to_str()).expect("load config with override");
        assert_eq!(config.base_url, "http://from-yaml:9000");
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
        clear_env();
    }

    #[test]
    #[serial]
    fn missing_override_file_is_an_error() {
        clear_env();
        assert!(ClientConfig::from_env_or_yaml(Some("/nonexistent/client.yaml")).is_err());
    }

    #[test]
    #[serial]
    fn zero_values_are_ignored() {
        clear_env();
        unsafe { std::env::set_var("ONEDESK_REQUEST_TIMEOUT_MS", "0") };
        let config = ClientConfig::from_env();
        assert_eq!(
            config.request_timeout,
            Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)
        );
        clear_env();
    }
}
