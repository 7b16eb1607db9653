//! Shared configuration types for Encore crates
//!
//! Configuration is read from environment variables so that the same
//! client can be pointed at the public setlist.fm API or at a local mock.

mod error;
mod setlistfm;

pub use error::{ConfigError, ConfigResult};
pub use setlistfm::{SetlistfmConfig, DEFAULT_SETLISTFM_URL, DEFAULT_TIMEOUT_SECS};

use std::env;

/// Helper function to get a required environment variable
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}
