//! Terminal front end.
//!
//! Positions on the command line are 1-based, matching the numbered list
//! that `list` prints.

use std::io::Write;

use clap::{Parser, Subcommand};

use crate::board::{ActionOutcome, TaskBoard};

#[derive(Debug, Parser)]
#[command(name = "todo-list", version, about = "A plain-text to-do list kept in ~/.todo_list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the task list
    List {
        /// Print the list as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Add a task
    Add {
        /// Task text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Mark a task as completed (removes it)
    Complete {
        /// Position of the task in the list
        position: Option<usize>,
    },
    /// Delete a task
    Delete {
        /// Position of the task in the list
        position: Option<usize>,
    },
    /// Print the location of the task file
    Path,
    /// Serve the HTTP API
    Serve,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List { json: false })
    }
}

/// Convert a 1-based position to a selection. `0` selects nothing.
fn selection(position: Option<usize>) -> Option<usize> {
    position.and_then(|n| n.checked_sub(1))
}

/// Run a command that does not need the async runtime.
///
/// Board errors are returned unchanged so the caller can tell warnings
/// from faults.
pub fn execute(command: &Command, board: &TaskBoard, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::List { json } => {
            let tasks = board.tasks()?;
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&tasks)?)?;
            } else {
                print_tasks(out, &tasks)?;
            }
        }
        Command::Add { text } => {
            let outcome = board.add(&text.join(" "))?;
            print_outcome(out, &outcome)?;
        }
        Command::Complete { position } => {
            let outcome = board.complete(selection(*position))?;
            print_outcome(out, &outcome)?;
        }
        Command::Delete { position } => {
            let outcome = board.delete(selection(*position))?;
            print_outcome(out, &outcome)?;
        }
        Command::Path => {
            writeln!(out, "{}", board.store().path().display())?;
        }
        Command::Serve => anyhow::bail!("serve must be run on the async runtime"),
    }
    Ok(())
}

fn print_outcome(out: &mut impl Write, outcome: &ActionOutcome) -> std::io::Result<()> {
    writeln!(out, "{}", outcome.message)?;
    print_tasks(out, &outcome.tasks)
}

fn print_tasks(out: &mut impl Write, tasks: &[String]) -> std::io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "No tasks.");
    }
    for (i, task) in tasks.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, task)?;
    }
    Ok(())
}
