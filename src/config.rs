//! Configuration types.

use crate::error::ConfigError;
use crate::navigation::Entry;

const ONBOARDING_COMPLETE_VAR: &str = "STARTUP_NAV_ONBOARDING_COMPLETE";
const OPEN_URL_VAR: &str = "STARTUP_NAV_OPEN_URL";
const LOG_VAR: &str = "STARTUP_NAV_LOG";

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Whether the onboarding collaborator already reports completion at startup.
    pub onboarding_complete: bool,
    /// Target to open on startup; `None` means a default launch.
    pub open_url: Option<String>,
    /// Log directive used when `RUST_LOG` is unset.
    pub default_log: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            onboarding_complete: false,
            open_url: None,
            default_log: "info".to_string(),
        }
    }
}

impl HostConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let onboarding_complete = match lookup(ONBOARDING_COMPLETE_VAR) {
            Some(raw) => parse_bool(ONBOARDING_COMPLETE_VAR, &raw)?,
            None => defaults.onboarding_complete,
        };

        let open_url = lookup(OPEN_URL_VAR).filter(|s| !s.trim().is_empty());

        let default_log = lookup(LOG_VAR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.default_log);

        Ok(Self {
            onboarding_complete,
            open_url,
            default_log,
        })
    }

    /// The entry the host performs when its window is first created.
    pub fn startup_entry(&self) -> Entry {
        match &self.open_url {
            Some(url) => Entry::View {
                target: url.clone(),
            },
            None => Entry::Launch,
        }
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got {other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = HostConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.startup_entry(), Entry::Launch);
    }

    #[test]
    fn reads_all_vars() {
        let config = HostConfig::from_lookup(lookup(&[
            (ONBOARDING_COMPLETE_VAR, "Yes"),
            (OPEN_URL_VAR, "https://example.com"),
            (LOG_VAR, "startup_nav=debug"),
        ]))
        .unwrap();
        assert!(config.onboarding_complete);
        assert_eq!(config.default_log, "startup_nav=debug");
        assert_eq!(
            config.startup_entry(),
            Entry::View {
                target: "https://example.com".to_string()
            }
        );
    }

    #[test]
    fn blank_url_means_launch() {
        let config = HostConfig::from_lookup(lookup(&[(OPEN_URL_VAR, "  ")])).unwrap();
        assert_eq!(config.open_url, None);
    }

    #[test]
    fn rejects_bad_boolean() {
        let err = HostConfig::from_lookup(lookup(&[(ONBOARDING_COMPLETE_VAR, "maybe")]))
            .unwrap_err();
        match err {
            ConfigError::InvalidValue { key, .. } => assert_eq!(key, ONBOARDING_COMPLETE_VAR),
        }
    }
}
