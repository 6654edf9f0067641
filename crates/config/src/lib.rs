//! Shell configuration from environment variables.
//!
//! ```text
//! MYDB_DATA_DIR  directory holding <table>.meta and <table>.data  (default: ".")
//! MYDB_TABLE     table to open; the shell prompts when unset      (default: unset)
//! MYDB_LOG       tracing filter directive, e.g. "debug"           (default: "warn")
//! ```
//!
//! Variables that are set to an empty string count as unset, except
//! `MYDB_DATA_DIR`, which must name a directory when present.

use std::path::PathBuf;

use thiserror::Error;

pub const DATA_DIR_VAR: &str = "MYDB_DATA_DIR";
pub const TABLE_VAR: &str = "MYDB_TABLE";
pub const LOG_VAR: &str = "MYDB_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),
}

/// Start-up settings for the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the table files are read from.
    pub data_dir: PathBuf,
    /// Table to open without prompting.
    pub table: Option<String>,
    /// `tracing` filter directive for stderr logging.
    pub log_filter: String,
}

impl Config {
    pub const DEFAULT_DATA_DIR: &'static str = ".";
    pub const DEFAULT_LOG_FILTER: &'static str = "warn";

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup(DATA_DIR_VAR) {
            Some(dir) if dir.is_empty() => return Err(ConfigError::Empty(DATA_DIR_VAR)),
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(Self::DEFAULT_DATA_DIR),
        };
        let table = lookup(TABLE_VAR).filter(|t| !t.is_empty());
        let log_filter = lookup(LOG_VAR)
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            data_dir,
            table,
            log_filter,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            table: None,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
