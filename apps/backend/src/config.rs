//! Server configuration loaded from the environment.

use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

/// Runtime configuration for the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Maximum characters accepted per sentence.
    pub max_input_chars: usize,
    /// Maximum items accepted in one batch request.
    pub max_batch_items: usize,
    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_input_chars: 2000,
            max_batch_items: 100,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            max_input_chars: parse_limit(&lookup, "MAX_INPUT_CHARS", defaults.max_input_chars)?,
            max_batch_items: parse_limit(&lookup, "MAX_BATCH_ITEMS", defaults.max_batch_items)?,
            max_body_bytes: parse_limit(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
        })
    }

    /// Socket address string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

fn parse_limit<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_var(lookup, key, default)? {
        0 => Err(ConfigError::Zero { key }),
        n => Ok(n),
    }
}
