use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{models::error::Error, utils::state::AppState};

#[derive(Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    q: String,
}

pub async fn list_courses(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let catalog = state.catalog().await;
    (
        StatusCode::OK,
        Json(json!({ "loaded": !catalog.is_empty(), "courses": catalog.courses() })),
    )
        .into_response()
}

/// Resolves course input without touching the mogi, for live feedback while
/// typing.
pub async fn resolve_course(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveQuery>,
) -> Result<impl IntoResponse, Error> {
    let catalog = state.catalog().await;
    let course = catalog.resolve(&params.q)?;
    Ok((StatusCode::OK, Json(json!({ "course": course }))))
}

pub async fn reload_courses(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, Error> {
    let catalog = state.reload_catalog().await?;
    info!("Course catalog reloaded: {} courses", catalog.courses().len());
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Catalog reloaded", "count": catalog.courses().len() })),
    ))
}
