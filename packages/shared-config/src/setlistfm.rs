//! setlist.fm API configuration types

use std::fmt;

use crate::{get_env_or_default, get_required_env, parse_env, ConfigError, ConfigResult};

/// Public setlist.fm REST API root
pub const DEFAULT_SETLISTFM_URL: &str = "https://api.setlist.fm/rest/1.0/";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// setlist.fm API configuration
#[derive(Clone)]
pub struct SetlistfmConfig {
    /// API root that endpoint paths are appended to
    pub url: String,

    /// API key sent in the `x-api-key` header
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl fmt::Debug for SetlistfmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetlistfmConfig")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SetlistfmConfig {
    /// Load setlist.fm configuration from environment variables
    ///
    /// - `SETLISTFM_API_KEY` (required)
    /// - `SETLISTFM_URL` (default: the public API root)
    /// - `SETLISTFM_TIMEOUT` in seconds (default: 30)
    pub fn from_env() -> ConfigResult<Self> {
        let api_key = get_required_env("SETLISTFM_API_KEY")?;

        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "SETLISTFM_API_KEY".to_string(),
                "API key cannot be empty".to_string(),
            ));
        }

        let config = Self {
            url: get_env_or_default("SETLISTFM_URL", DEFAULT_SETLISTFM_URL),
            api_key,
            timeout_secs: parse_env("SETLISTFM_TIMEOUT", DEFAULT_TIMEOUT_SECS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration for the public API with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            url: DEFAULT_SETLISTFM_URL.to_string(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create a configuration with a custom URL (useful for testing)
    pub fn with_url(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::new(api_key)
        }
    }

    /// Check every field that would make a client unusable
    pub fn validate(&self) -> ConfigResult<()> {
        self.validate_url()?;
        self.validate_timeout()
    }

    /// Check that the timeout leaves room for a request
    pub fn validate_timeout(&self) -> ConfigResult<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "SETLISTFM_TIMEOUT".to_string(),
                "timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// Check that the URL is an absolute http(s) URL
    pub fn validate_url(&self) -> ConfigResult<()> {
        let url = self.url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidUrl(
                "SETLISTFM_URL".to_string(),
                self.url.clone(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 3] = ["SETLISTFM_API_KEY", "SETLISTFM_URL", "SETLISTFM_TIMEOUT"];

    #[test]
    fn test_from_env_requires_api_key() {
        temp_env::with_vars_unset(VARS, || {
            let result = SetlistfmConfig::from_env();
            assert!(matches!(result, Err(ConfigError::MissingEnvVar(name)) if name == "SETLISTFM_API_KEY"));
        });
    }

    #[test]
    fn test_from_env_rejects_blank_api_key() {
        temp_env::with_var("SETLISTFM_API_KEY", Some("   "), || {
            let result = SetlistfmConfig::from_env();
            assert!(matches!(result, Err(ConfigError::InvalidValue(_, _))));
        });
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(
            [
                ("SETLISTFM_API_KEY", Some("abc")),
                ("SETLISTFM_URL", None),
                ("SETLISTFM_TIMEOUT", None),
            ],
            || {
                let config = SetlistfmConfig::from_env().unwrap();
                assert_eq!(config.api_key, "abc");
                assert_eq!(config.url, DEFAULT_SETLISTFM_URL);
                assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
            },
        );
    }

    #[test]
    fn test_from_env_overrides() {
        temp_env::with_vars(
            [
                ("SETLISTFM_API_KEY", Some("abc")),
                ("SETLISTFM_URL", Some("http://localhost:8080/")),
                ("SETLISTFM_TIMEOUT", Some("5")),
            ],
            || {
                let config = SetlistfmConfig::from_env().unwrap();
                assert_eq!(config.url, "http://localhost:8080/");
                assert_eq!(config.timeout_secs, 5);
            },
        );
    }

    #[test]
    fn test_from_env_rejects_bad_url() {
        temp_env::with_vars(
            [
                ("SETLISTFM_API_KEY", Some("abc")),
                ("SETLISTFM_URL", Some("api.setlist.fm")),
                ("SETLISTFM_TIMEOUT", None),
            ],
            || {
                let result = SetlistfmConfig::from_env();
                assert!(matches!(result, Err(ConfigError::InvalidUrl(_, _))));
            },
        );
    }

    #[test]
    fn test_from_env_rejects_zero_timeout() {
        temp_env::with_vars(
            [
                ("SETLISTFM_API_KEY", Some("abc")),
                ("SETLISTFM_URL", None),
                ("SETLISTFM_TIMEOUT", Some("0")),
            ],
            || {
                let result = SetlistfmConfig::from_env();
                assert!(matches!(
                    result,
                    Err(ConfigError::InvalidValue(name, _)) if name == "SETLISTFM_TIMEOUT"
                ));
            },
        );
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = SetlistfmConfig {
            timeout_secs: 0,
            ..SetlistfmConfig::new("key")
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_, _))
        ));
        assert!(SetlistfmConfig::new("key").validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = SetlistfmConfig::new("secret_key");
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_with_url_keeps_defaults() {
        let config = SetlistfmConfig::with_url("http://127.0.0.1:9999", "key");
        assert_eq!(config.url, "http://127.0.0.1:9999");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
