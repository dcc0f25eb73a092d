//! # todo_list
//!
//! A to-do list kept as plain text in `~/.todo_list`, one task per line.
//!
//! ## Architecture
//!
//! ```text
//!    CLI (cli)         HTTP API (api)
//!         \               /
//!          ▼             ▼
//!        ┌─────────────────┐
//!        │    TaskBoard    │  load -> mutate -> save, per action
//!        └────────┬────────┘
//!                 ▼
//!        ┌─────────────────┐
//!        │    TaskStore    │  read lines / full-replace write
//!        └─────────────────┘
//! ```
//!
//! ## Modules
//! - `store`: the backing file
//! - `board`: add / complete / delete transactions
//! - `config`: file location and HTTP bind address
//! - `api`: JSON endpoints
//! - `cli`: terminal commands

pub mod api;
pub mod board;
pub mod cli;
pub mod config;
pub mod store;

pub use board::{ActionOutcome, BoardError, Removal, TaskBoard};
pub use config::Config;
pub use store::{StoreError, TaskStore};
