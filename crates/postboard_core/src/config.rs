//! Runtime configuration resolved from `POSTBOARD_*` environment variables.
//!
//! | Variable              | Default                  |
//! |-----------------------|--------------------------|
//! | `POSTBOARD_DB_PATH`   | `postboard.sqlite3`      |
//! | `POSTBOARD_LOG_LEVEL` | [`default_log_level`]    |
//! | `POSTBOARD_LOG_DIR`   | unset (file logging off) |
//!
//! Blank values count as unset.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "POSTBOARD_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "POSTBOARD_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "POSTBOARD_LOG_DIR";
pub const DEFAULT_DB_FILE_NAME: &str = "postboard.sqlite3";

/// Resolved settings for opening the store and starting logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    /// - `UnsupportedLevel` when `POSTBOARD_LOG_LEVEL` is not a known level.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LoggingError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = read(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = normalize_level(&level)?;
        }
        config.log_dir = read(LOG_DIR_ENV).map(PathBuf::from);

        Ok(config)
    }

    /// Starts file logging when a log directory is configured.
    ///
    /// Returns whether logging is active afterwards.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        match self.log_dir.as_ref() {
            Some(dir) => crate::logging::init_logging(self.log_level, dir).map(|()| true),
            None => Ok(false),
        }
    }
}
