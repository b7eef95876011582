//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `WISHFLICK_SESSION_FILE` - Path of the JSON session vault file
//!   (default: in-memory, session lost on exit)
//! - `WISHFLICK_RECOMMENDATION_LIMIT` - Wishes per recommendation strip
//!   (default: 3)
//! - `WISHFLICK_ACTIVITY_CAPACITY` - Retained activity log entries
//!   (default: 100)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::session::vault::{FileVault, MemoryVault, SessionVault};

const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;
const DEFAULT_ACTIVITY_CAPACITY: usize = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where to persist the session record; `None` keeps it in memory.
    pub session_file: Option<PathBuf>,
    /// How many wishes a recommendation strip shows.
    pub recommendation_limit: usize,
    /// How many activity entries the derived log retains.
    pub activity_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_file: None,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            activity_capacity: DEFAULT_ACTIVITY_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if a set variable fails to
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            session_file: env::var("WISHFLICK_SESSION_FILE").ok().map(PathBuf::from),
            recommendation_limit: positive_var(
                "WISHFLICK_RECOMMENDATION_LIMIT",
                DEFAULT_RECOMMENDATION_LIMIT,
            )?,
            activity_capacity: positive_var(
                "WISHFLICK_ACTIVITY_CAPACITY",
                DEFAULT_ACTIVITY_CAPACITY,
            )?,
        })
    }

    /// Build the session vault this configuration calls for.
    #[must_use]
    pub fn vault(&self) -> Box<dyn SessionVault> {
        self.session_file.as_ref().map_or_else(
            || Box::new(MemoryVault::new()) as Box<dyn SessionVault>,
            |path| Box::new(FileVault::new(path)) as Box<dyn SessionVault>,
        )
    }
}

fn positive_var(name: &str, default: usize) -> Result<usize, ConfigError> {
    match env::var(name) {
        Ok(raw) => parse_positive(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_positive(name: &str, raw: &str) -> Result<usize, ConfigError> {
    let value: usize = raw
        .parse()
        .map_err(|_| ConfigError::InvalidEnvVar(name.to_owned(), format!("not a number: {raw}")))?;
    if value == 0 {
        return Err(ConfigError::InvalidEnvVar(
            name.to_owned(),
            "must be greater than zero".to_owned(),
        ));
    }
    Ok(value)
}
