use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use http::{header, StatusCode};
use serde_json::json;
use tracing::{error, info, warn};

use crate::{
    models::error::Error,
    utils::{
        snapshot::{backup_file_name, export_state, import_state},
        state::AppState,
    },
};

pub async fn export_data(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, Error> {
    let tracker = state.tracker.read().await;
    let payload = export_state(&tracker).map_err(|e| {
        error!("Snapshot export failed: {}", e);
        Error::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to export data")
    })?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        backup_file_name(chrono::Utc::now())
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payload,
    ))
}

/// Replaces the whole tracker state with an exported snapshot.
pub async fn import_data(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<impl IntoResponse, Error> {
    let imported = import_state(&body).inspect_err(|e| warn!("Import rejected: {}", e))?;

    let mut tracker = state.tracker.write().await;
    *tracker = imported;
    info!("Imported snapshot with {} archived mogis", tracker.history.len());

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Imported", "historyCount": tracker.history.len() })),
    ))
}
