//! Routes for links.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use propro_core::{Link, LinkPayload};
use propro_store::LinkRepo;

use super::DeleteResponse;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_links(State(state): State<AppState>) -> Result<Json<Vec<Link>>, ApiError> {
    let links = LinkRepo::new(state.db.clone()).list()?;
    Ok(Json(links))
}

pub async fn create_link(
    State(state): State<AppState>,
    Json(payload): Json<LinkPayload>,
) -> Result<(StatusCode, Json<Link>), ApiError> {
    let link = LinkRepo::new(state.db.clone()).create(&payload)?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<LinkPayload>,
) -> Result<Json<Option<Link>>, ApiError> {
    let link = LinkRepo::new(state.db.clone()).update(id, &payload)?;
    Ok(Json(link))
}

pub async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    LinkRepo::new(state.db.clone()).delete(id)?;
    Ok(Json(DeleteResponse {
        message: "Link deleted successfully".into(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/links", get(list_links).post(create_link))
        .route("/api/links/{id}", put(update_link).delete(delete_link))
}
