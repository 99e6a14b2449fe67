use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use console_defs::ConsoleError;
use serde::Deserialize;
use url::Url;

pub const ENDPOINT_ENV: &str = "WORKSHOP_CONSOLE_API_ENDPOINT";
pub const USER_ENV: &str = "WORKSHOP_CONSOLE_USER";
pub const REFRESH_ENV: &str = "WORKSHOP_CONSOLE_REFRESH_SECS";

pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Contents of `config.json` in the console config directory.
#[derive(Debug, Default, Deserialize)]
pub struct StoredConfig {
    pub api_endpoint: Option<String>,
    pub forwarded_user: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

impl StoredConfig {
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .context(format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&json)
            .context(format!("Failed to parse config file {}", path.display()))
    }
}

/// Values given on the command line; they win over everything else.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub api_endpoint: Option<String>,
    pub forwarded_user: Option<String>,
    pub refresh_interval_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub api_endpoint: Url,
    pub forwarded_user: Option<String>,
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
}

impl ConsoleConfig {
    /// Resolve the configuration from overrides, environment and config file.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let stored = StoredConfig::read(&crate::config_path::get_config_path()?)?;
        Self::resolve(overrides, |key| std::env::var(key).ok(), stored)
    }

    pub fn resolve(
        overrides: ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
        stored: StoredConfig,
    ) -> Result<Self> {
        let endpoint = overrides
            .api_endpoint
            .or_else(|| env(ENDPOINT_ENV))
            .or(stored.api_endpoint)
            .filter(|e| !e.trim().is_empty())
            .ok_or(ConsoleError::MissingEndpoint())?;

        let api_endpoint = Url::parse(endpoint.trim())
            .map_err(|e| ConsoleError::InvalidEndpoint(endpoint.clone(), e.to_string()))?;

        let forwarded_user = overrides
            .forwarded_user
            .or_else(|| env(USER_ENV))
            .or(stored.forwarded_user)
            .filter(|u| !u.is_empty());

        let refresh_secs = match overrides.refresh_interval_secs {
            Some(secs) => secs,
            None => match env(REFRESH_ENV) {
                Some(value) => value.trim().parse::<u64>().map_err(|_| {
                    ConsoleError::InvalidConfig(format!(
                        "{} must be a number of seconds, got \"{}\"",
                        REFRESH_ENV, value
                    ))
                })?,
                None => stored
                    .refresh_interval_secs
                    .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS),
            },
        };
        if refresh_secs == 0 {
            return Err(ConsoleError::InvalidConfig(
                "refresh interval must be at least one second".to_string(),
            )
            .into());
        }

        let timeout_secs = stored
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConsoleError::InvalidConfig(
                "request timeout must be at least one second".to_string(),
            )
            .into());
        }

        Ok(Self {
            api_endpoint,
            forwarded_user,
            refresh_interval: Duration::from_secs(refresh_secs),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_override_wins_over_env_and_file() {
        let overrides = ConfigOverrides {
            api_endpoint: Some("http://flag:8080".to_string()),
            ..Default::default()
        };
        let stored = StoredConfig {
            api_endpoint: Some("http://file:8080".to_string()),
            forwarded_user: Some("file-user".to_string()),
            ..Default::default()
        };
        let config = ConsoleConfig::resolve(
            overrides,
            env_from(&[(ENDPOINT_ENV, "http://env:8080")]),
            stored,
        )
        .unwrap();

        assert_eq!(config.api_endpoint.as_str(), "http://flag:8080/");
        assert_eq!(config.forwarded_user.as_deref(), Some("file-user"));
        assert_eq!(config.refresh_interval, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_env_wins_over_file() {
        let stored = StoredConfig {
            api_endpoint: Some("http://file:8080".to_string()),
            refresh_interval_secs: Some(60),
            ..Default::default()
        };
        let config = ConsoleConfig::resolve(
            ConfigOverrides::default(),
            env_from(&[(ENDPOINT_ENV, "http://env:9090"), (REFRESH_ENV, "5")]),
            stored,
        )
        .unwrap();

        assert_eq!(config.api_endpoint.as_str(), "http://env:9090/");
        assert_eq!(config.refresh_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_endpoint() {
        let err = ConsoleConfig::resolve(
            ConfigOverrides::default(),
            env_from(&[]),
            StoredConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConsoleError>(),
            Some(ConsoleError::MissingEndpoint())
        ));
    }

    #[test]
    fn test_invalid_endpoint_and_interval() {
        let err = ConsoleConfig::resolve(
            ConfigOverrides {
                api_endpoint: Some("not a url".to_string()),
                ..Default::default()
            },
            env_from(&[]),
            StoredConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConsoleError>(),
            Some(ConsoleError::InvalidEndpoint(_, _))
        ));

        let err = ConsoleConfig::resolve(
            ConfigOverrides {
                api_endpoint: Some("http://localhost:8080".to_string()),
                refresh_interval_secs: Some(0),
                ..Default::default()
            },
            env_from(&[]),
            StoredConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConsoleError>(),
            Some(ConsoleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_read_stored_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"api_endpoint": "http://localhost:8080", "forwarded_user": "user1"}"#,
        )
        .unwrap();

        let stored = StoredConfig::read(&path).unwrap();
        assert_eq!(stored.api_endpoint.as_deref(), Some("http://localhost:8080"));
        assert_eq!(stored.forwarded_user.as_deref(), Some("user1"));

        let missing = StoredConfig::read(&dir.path().join("absent.json")).unwrap();
        assert!(missing.api_endpoint.is_none());
    }
}
