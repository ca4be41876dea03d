//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own settings (site address, site root) stay in
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables.

use thiserror::Error;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,laftec=debug";

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean (true/false, 1/0, yes/no, on/off), got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Brotli/gzip compression of responses (`LAFTEC_COMPRESSION`)
    pub compression: bool,

    /// Per-request tracing spans (`LAFTEC_LOG_REQUESTS`)
    pub log_requests: bool,

    /// `tracing` filter directive (`RUST_LOG`)
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            compression: parse_bool("LAFTEC_COMPRESSION", lookup("LAFTEC_COMPRESSION"), true)?,
            log_requests: parse_bool("LAFTEC_LOG_REQUESTS", lookup("LAFTEC_LOG_REQUESTS"), true)?,
            log_filter: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            log_requests: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn parse_bool(key: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    // ========================================================================
    // Defaults (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.compression);
        assert!(config.log_requests);
        assert_eq!(config.log_filter, "info,laftec=debug");
    }

    #[test]
    fn test_config_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("LAFTEC_COMPRESSION", "  "),
            ("RUST_LOG", ""),
        ]))
        .unwrap();

        assert!(config.compression);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    // ========================================================================
    // Boolean parsing
    // ========================================================================

    #[test]
    fn test_config_accepts_boolean_spellings() {
        for (raw, expected) in [
            ("true", true),
            ("1", true),
            ("YES", true),
            ("on", true),
            ("false", false),
            ("0", false),
            ("No", false),
            (" off ", false),
        ] {
            let config =
                Config::from_lookup(lookup_from(&[("LAFTEC_COMPRESSION", raw)])).unwrap();
            assert_eq!(config.compression, expected, "value {raw:?}");
        }
    }

    #[test]
    fn test_config_rejects_invalid_boolean() {
        let err = Config::from_lookup(lookup_from(&[("LAFTEC_LOG_REQUESTS", "maybe")]))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidBool {
                key: "LAFTEC_LOG_REQUESTS",
                value: "maybe".to_string(),
            }
        );
        assert!(err.to_string().contains("LAFTEC_LOG_REQUESTS"));
        assert!(err.to_string().contains("\"maybe\""));
    }

    #[test]
    fn test_config_custom_log_filter() {
        let config =
            Config::from_lookup(lookup_from(&[("RUST_LOG", "warn,tower_http=debug")])).unwrap();
        assert_eq!(config.log_filter, "warn,tower_http=debug");
    }
}
