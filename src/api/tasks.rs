//! API endpoints for the task list.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::board::{ActionOutcome, BoardError};

use super::routes::AppState;

/// Create the task API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_tasks).post(add_task))
        .route("/complete", post(complete_task))
        .route("/delete", post(delete_task))
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<String>,
}

/// Request to add a task.
#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub text: String,
}

/// Request naming the selected task.
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    /// Zero-based display position. Null or missing means nothing is selected.
    #[serde(default)]
    pub index: Option<usize>,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

fn board_error(e: BoardError) -> (StatusCode, String) {
    let status = match &e {
        BoardError::EmptyTask | BoardError::MultilineTask | BoardError::NoSelection => {
            StatusCode::BAD_REQUEST
        }
        BoardError::OutOfRange { .. } => StatusCode::NOT_FOUND,
        BoardError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if e.is_warning() {
        tracing::warn!("{}", e);
    } else {
        tracing::error!("{}", e);
    }
    (status, e.to_string())
}

/// GET /api/tasks
async fn list_tasks(State(state): State<Arc<AppState>>) -> ApiResult<TaskListResponse> {
    let board = state.board.lock().await;
    let tasks = board.tasks().map_err(board_error)?;
    Ok(Json(TaskListResponse { tasks }))
}

/// POST /api/tasks
async fn add_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddTaskRequest>,
) -> ApiResult<ActionOutcome> {
    let board = state.board.lock().await;
    board.add(&req.text).map(Json).map_err(board_error)
}

/// POST /api/tasks/complete
async fn complete_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectionRequest>,
) -> ApiResult<ActionOutcome> {
    let board = state.board.lock().await;
    board.complete(req.index).map(Json).map_err(board_error)
}

/// POST /api/tasks/delete
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectionRequest>,
) -> ApiResult<ActionOutcome> {
    let board = state.board.lock().await;
    board.delete(req.index).map(Json).map_err(board_error)
}

#[cfg(test)]
mod tests {
    use super::super::routes::router;
    use super::*;
    use crate::board::TaskBoard;
    use crate::store::{TaskStore, TODO_FILE_NAME};
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tempfile::{tempdir, TempDir};
    use tower::ServiceExt;

    fn app() -> (TempDir, Router) {
        let temp = tempdir().unwrap();
        let board = TaskBoard::new(TaskStore::new(temp.path().join(TODO_FILE_NAME)));
        (temp, router(Arc::new(AppState::new(board))))
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    fn json_body(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (_temp, app) = app();
        let (status, body) = call(&app, "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn test_list_starts_empty() {
        let (_temp, app) = app();
        let (status, body) = call(&app, "GET", "/api/tasks", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!({ "tasks": [] }));
    }

    #[tokio::test]
    async fn test_add_then_complete() {
        let (_temp, app) = app();

        for text in ["buy milk", "walk dog", "file taxes"] {
            let (status, _) =
                call(&app, "POST", "/api/tasks", Some(json!({ "text": text }))).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = call(
            &app,
            "POST",
            "/api/tasks/complete",
            Some(json!({ "index": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body = json_body(&body);
        assert_eq!(body["task"], "walk dog");
        assert_eq!(body["message"], "Task marked as completed!");
        assert_eq!(body["tasks"], json!(["buy milk", "file taxes"]));

        let (_, body) = call(&app, "GET", "/api/tasks", None).await;
        assert_eq!(json_body(&body)["tasks"], json!(["buy milk", "file taxes"]));
    }

    #[tokio::test]
    async fn test_add_blank_is_bad_request() {
        let (_temp, app) = app();
        let (status, body) =
            call(&app, "POST", "/api/tasks", Some(json!({ "text": "  " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"Task text must not be empty.");
    }

    #[tokio::test]
    async fn test_add_multiline_is_bad_request() {
        let (_temp, app) = app();
        let (status, body) = call(
            &app,
            "POST",
            "/api/tasks",
            Some(json!({ "text": "buy milk\nwalk dog" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"Task text must be a single line.");

        let (_, body) = call(&app, "GET", "/api/tasks", None).await;
        assert_eq!(json_body(&body), json!({ "tasks": [] }));
    }

    #[tokio::test]
    async fn test_delete_without_selection() {
        let (_temp, app) = app();
        let (status, body) = call(&app, "POST", "/api/tasks/delete", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"No task selected.");
    }

    #[tokio::test]
    async fn test_delete_out_of_range() {
        let (_temp, app) = app();
        call(&app, "POST", "/api/tasks", Some(json!({ "text": "only" }))).await;

        let (status, _) = call(
            &app,
            "POST",
            "/api/tasks/delete",
            Some(json!({ "index": 5 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
