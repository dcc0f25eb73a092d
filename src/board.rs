//! Task board - the actions a front end offers on top of the store.
//!
//! Every action is a single load-mutate-save transaction against the
//! backing file. Nothing is cached between actions, so an edit made by
//! another process is picked up on the next action (and overwritten by it,
//! if both touched the file).

use serde::Serialize;
use thiserror::Error;

use crate::store::{StoreError, TaskStore};

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Task text must not be empty.")]
    EmptyTask,

    #[error("Task text must be a single line.")]
    MultilineTask,

    #[error("No task selected.")]
    NoSelection,

    #[error("Task {index} does not exist (list has {len} tasks).")]
    OutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BoardError {
    /// Whether this is a problem with the user's request rather than a
    /// system fault. Front ends show these as warnings.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

pub type BoardResult<T> = Result<T, BoardError>;

/// Ways of taking a task off the list.
///
/// Both remove the entry unconditionally; only the confirmation differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Complete,
    Delete,
}

impl Removal {
    pub fn confirmation(&self) -> &'static str {
        match self {
            Self::Complete => "Task marked as completed!",
            Self::Delete => "Task removed successfully!",
        }
    }
}

/// Result of a successful action, ready for redisplay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    /// The task text that was added or removed.
    pub task: String,
    pub message: String,
    /// The list as reloaded from disk after the change.
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TaskBoard {
    store: TaskStore,
}

impl TaskBoard {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Current list, straight from disk.
    pub fn tasks(&self) -> BoardResult<Vec<String>> {
        Ok(self.store.load()?)
    }

    /// Append a task. Surrounding whitespace is dropped; blank or
    /// multi-line text is rejected before the file is touched.
    pub fn add(&self, text: &str) -> BoardResult<ActionOutcome> {
        let task = text.trim();
        if task.is_empty() {
            return Err(BoardError::EmptyTask);
        }
        if task.contains(['\n', '\r']) {
            return Err(BoardError::MultilineTask);
        }

        let mut tasks = self.store.load()?;
        tasks.push(task.to_string());
        self.store.save(&tasks)?;
        tracing::info!(task = %task, "Task added");

        Ok(ActionOutcome {
            task: task.to_string(),
            message: "Task added!".to_string(),
            tasks: self.store.load()?,
        })
    }

    pub fn complete(&self, selection: Option<usize>) -> BoardResult<ActionOutcome> {
        self.remove(Removal::Complete, selection)
    }

    pub fn delete(&self, selection: Option<usize>) -> BoardResult<ActionOutcome> {
        self.remove(Removal::Delete, selection)
    }

    /// Remove the task at `selection` (zero-based display position).
    fn remove(&self, kind: Removal, selection: Option<usize>) -> BoardResult<ActionOutcome> {
        let index = selection.ok_or(BoardError::NoSelection)?;

        let mut tasks = self.store.load()?;
        if index >= tasks.len() {
            return Err(BoardError::OutOfRange {
                index,
                len: tasks.len(),
            });
        }

        let task = tasks.remove(index);
        self.store.save(&tasks)?;
        tracing::info!(task = %task, index, action = ?kind, "Task removed");

        Ok(ActionOutcome {
            task,
            message: kind.confirmation().to_string(),
            tasks: self.store.load()?,
        })
    }
}
