//! Routes for the expense ledger.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use propro_core::{Expense, ExpensePayload};
use propro_store::ExpenseRepo;

use super::DeleteResponse;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let entries = ExpenseRepo::new(state.db.clone()).list()?;
    Ok(Json(entries))
}

pub async fn create_expense(
    State(state): State<AppState>,
    Json(payload): Json<ExpensePayload>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let entry = ExpenseRepo::new(state.db.clone()).create(&payload)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ExpensePayload>,
) -> Result<Json<Option<Expense>>, ApiError> {
    let entry = ExpenseRepo::new(state.db.clone()).update(id, &payload)?;
    Ok(Json(entry))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    ExpenseRepo::new(state.db.clone()).delete(id)?;
    Ok(Json(DeleteResponse {
        message: "Expense deleted successfully".into(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/expenses", get(list_expenses).post(create_expense))
        .route(
            "/api/expenses/{id}",
            put(update_expense).delete(delete_expense),
        )
}
