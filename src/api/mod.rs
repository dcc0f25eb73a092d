//! HTTP API for the to-do list.
//!
//! A thin JSON front end over [`TaskBoard`](crate::board::TaskBoard); any UI
//! can render the list and call back into these endpoints.

pub mod routes;
mod tasks;

pub use routes::{router, serve, AppState};
