//! HTTP server setup.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::board::TaskBoard;
use crate::config::Config;
use crate::store::TaskStore;

use super::tasks;

/// Shared application state.
pub struct AppState {
    /// Held for the whole of one load-mutate-save transaction, so requests
    /// handled by this process never interleave. Other processes writing
    /// the same file are not coordinated with.
    pub board: Mutex<TaskBoard>,
}

impl AppState {
    pub fn new(board: TaskBoard) -> Self {
        Self {
            board: Mutex::new(board),
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .nest("/api/tasks", tasks::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and run until Ctrl-C.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let todo_file = config.todo_file.clone();
    let state = Arc::new(AppState::new(TaskBoard::new(TaskStore::new(config.todo_file))));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        addr = %addr,
        todo_file = %todo_file.display(),
        "Serving to-do list"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// GET /api/health
async fn health() -> &'static str {
    "OK"
}
