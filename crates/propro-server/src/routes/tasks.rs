//! Routes for tasks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use propro_core::{Task, TaskPayload};
use propro_store::TaskRepo;

use super::DeleteResponse;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = TaskRepo::new(state.db.clone()).list()?;
    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = TaskRepo::new(state.db.clone()).create(&payload)?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Option<Task>>, ApiError> {
    let task = TaskRepo::new(state.db.clone()).update(id, &payload)?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    TaskRepo::new(state.db.clone()).delete(id)?;
    Ok(Json(DeleteResponse {
        message: "Task deleted successfully".into(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
}
