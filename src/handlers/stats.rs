use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;

use crate::utils::{stats, state::AppState};

pub async fn get_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let tracker = state.tracker.read().await;
    (StatusCode::OK, Json(stats::summary(&tracker.history))).into_response()
}

pub async fn get_overall_stats(
    State(state): State<Arc<AppState>>,
    Path(participants): Path<u32>,
) -> impl IntoResponse {
    let tracker = state.tracker.read().await;
    (
        StatusCode::OK,
        Json(stats::overall_stats(&tracker.history, participants)),
    )
        .into_response()
}

pub async fn get_race_stats(
    State(state): State<Arc<AppState>>,
    Path(participants): Path<u32>,
) -> impl IntoResponse {
    let tracker = state.tracker.read().await;
    (
        StatusCode::OK,
        Json(stats::race_stats(&tracker.history, participants)),
    )
        .into_response()
}

pub async fn get_course_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let tracker = state.tracker.read().await;
    (StatusCode::OK, Json(stats::course_stats(&tracker.history))).into_response()
}
