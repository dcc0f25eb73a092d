//! Task store - the plain-text file behind the to-do list.
//!
//! The file holds one task per line and nothing else. A missing file is an
//! empty list. Every save rewrites the whole file in place; there is no
//! locking and no temp-file-and-rename, so concurrent writers race and the
//! last save wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Line terminator written after every task.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Name of the backing file under the user's home directory.
pub const TODO_FILE_NAME: &str = ".todo_list";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read task file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write task file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable storage for an ordered list of tasks.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list.
    ///
    /// Each line is returned with its terminator and surrounding whitespace
    /// stripped. `\n`, `\r\n` and a lone `\r` all end a line. Blank lines
    /// come back as empty tasks. Content that is not valid UTF-8 is decoded
    /// lossily rather than rejected.
    pub fn load(&self) -> StoreResult<Vec<String>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No task file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let tasks = parse_lines(&String::from_utf8_lossy(&bytes));
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    /// Replace the file's entire contents with `tasks`.
    ///
    /// A failure part way through may leave the file truncated; callers
    /// should reload before retrying.
    pub fn save(&self, tasks: &[String]) -> StoreResult<()> {
        std::fs::write(&self.path, render_lines(tasks)).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "Saved tasks");
        Ok(())
    }
}

/// Split on `\n`, `\r\n` and a lone `\r`, then trim each line.
fn parse_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(|line| line.trim().to_string())
        .collect()
}

fn render_lines(tasks: &[String]) -> String {
    let mut out = String::with_capacity(tasks.iter().map(|t| t.len() + LINE_ENDING.len()).sum());
    for task in tasks {
        out.push_str(task);
        out.push_str(LINE_ENDING);
    }
    out
}
