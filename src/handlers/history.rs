use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{models::error::Error, utils::state::AppState};

pub async fn get_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let tracker = state.tracker.read().await;
    (StatusCode::OK, Json(json!({ "history": tracker.history }))).into_response()
}

pub async fn delete_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let mut tracker = state.tracker.write().await;
    let removed = tracker.delete_history(id)?;
    info!("Deleted archived mogi {}", removed.id);
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Mogi deleted", "deleted": removed })),
    ))
}
