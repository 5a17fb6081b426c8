use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::AppError;

use super::AppState;

pub async fn get_tasks(State(state): State<AppState>) -> anyhow::Result<Json<Value>, AppError> {
    Ok(Json(state.store.load()?))
}

// the body is not validated beyond being JSON; whatever the client sends is
// what gets persisted
pub async fn update_tasks(
    State(state): State<AppState>,
    Json(doc): Json<Value>,
) -> anyhow::Result<Json<Value>, AppError> {
    state.store.save(&doc)?;
    Ok(Json(json!({ "status": "success" })))
}
