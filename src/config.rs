//! Runtime configuration.
//!
//! The task file always lives at `$HOME/.todo_list`. Only the HTTP bind
//! address can be changed, through environment variables:
//! - `TODO_HOST` - interface to bind (default `127.0.0.1`)
//! - `TODO_PORT` - port to bind (default `3030`)

use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

use crate::store::TODO_FILE_NAME;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3030;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid TODO_PORT value {0:?}: expected a port number")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Backing file for the task list.
    pub todo_file: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Build the full server configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("TODO_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            todo_file: default_todo_file(),
            host: std::env::var("TODO_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Configuration pointing at an explicit task file, with default bind settings.
    pub fn with_todo_file(todo_file: impl Into<PathBuf>) -> Self {
        Self {
            todo_file: todo_file.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Location of the task file. Depends on `HOME` only, so commands that never
/// bind a socket are unaffected by the server variables.
pub fn default_todo_file() -> PathBuf {
    todo_file_under(std::env::var_os("HOME"))
}

fn todo_file_under(home: Option<OsString>) -> PathBuf {
    home.map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(TODO_FILE_NAME)
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}
