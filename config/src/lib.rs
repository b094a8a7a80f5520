//! Load configuration from a project `.env` file, then apply it to the process
//! environment with priority: **existing env > .env**.
//!
//! [`Settings`] then reads the process environment into a typed record; a
//! missing API key is a hard error so startup fails fast instead of at the
//! first model call.

mod dotenv;

use std::path::Path;

use thiserror::Error;

/// Environment variable holding the OpenAI API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable selecting the tracing sink (optional).
pub const TRACING_VAR: &str = "REDRAFT_TRACING";

/// Environment variable naming the project for log context (optional).
pub const PROJECT_VAR: &str = "REDRAFT_PROJECT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
    #[error("{API_KEY_VAR} is not set; put it in the environment or a .env file")]
    MissingApiKey,
}

/// Loads the project `.env` and sets environment variables only for keys that
/// are **not** already set, so the existing environment has priority.
///
/// * `override_dir`: if `Some`, look for `.env` in this directory instead of
///   `std::env::current_dir()`. A missing file is not an error.
pub fn load_dotenv(override_dir: Option<&Path>) -> Result<(), ConfigError> {
    let map = dotenv::load_env_map(override_dir).map_err(ConfigError::DotenvRead)?;
    for (key, value) in map {
        if std::env::var(&key).is_err() {
            std::env::set_var(key, value);
        }
    }
    Ok(())
}

/// Typed view of the process environment, read once at startup.
#[derive(Clone, Debug)]
pub struct Settings {
    /// OpenAI API key; required.
    pub api_key: String,
    /// Tracing sink selector; `None` when unset.
    pub tracing: Option<String>,
    /// Project name for log context; `None` when unset.
    pub project: Option<String>,
}

impl Settings {
    /// Reads settings from the process environment. Call [`load_dotenv`]
    /// first so `.env` values are visible.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        Ok(Self {
            api_key,
            tracing: std::env::var(TRACING_VAR).ok().filter(|v| !v.is_empty()),
            project: std::env::var(PROJECT_VAR).ok().filter(|v| !v.is_empty()),
        })
    }
}
