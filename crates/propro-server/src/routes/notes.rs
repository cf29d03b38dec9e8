//! Routes for notes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use propro_core::{Note, NotePayload};
use propro_store::NoteRepo;

use super::DeleteResponse;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = NoteRepo::new(state.db.clone()).list()?;
    Ok(Json(notes))
}

pub async fn create_note(
    State(state): State<AppState>,
    Json(payload): Json<NotePayload>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let note = NoteRepo::new(state.db.clone()).create(&payload)?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// Full replace. A missing id yields a 200 with a `null` body rather
/// than a 404.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<Option<Note>>, ApiError> {
    let note = NoteRepo::new(state.db.clone()).update(id, &payload)?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    NoteRepo::new(state.db.clone()).delete(id)?;
    Ok(Json(DeleteResponse {
        message: "Note deleted successfully".into(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", put(update_note).delete(delete_note))
}
