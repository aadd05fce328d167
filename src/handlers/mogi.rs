use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use chrono::NaiveDate;
use http::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::{
    models::{error::Error, mogi::Mogi},
    utils::{session_engine, state::AppState},
};

#[derive(Deserialize)]
pub struct AddRaceRequest {
    pub race: String,
    #[serde(default)]
    pub course: String,
    pub participants: Option<u32>,
}

#[derive(Deserialize)]
pub struct UpdateMogiRequest {
    pub participants: Option<u32>,
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeRequest {
    pub final_rank: f64,
    pub participants: Option<u32>,
}

#[derive(Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

pub fn mogi_view(mogi: &Mogi) -> Value {
    json!({
        "mogi": mogi,
        "status": mogi.status(),
        "raceCount": mogi.races.len(),
        "totalPoints": mogi.total_points(),
        "usedCourses": mogi.used_course_names(),
    })
}

pub async fn get_current(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let tracker = state.tracker.read().await;
    (StatusCode::OK, Json(mogi_view(&tracker.current_mogi))).into_response()
}

pub async fn add_race(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AddRaceRequest>,
) -> Result<impl IntoResponse, Error> {
    let catalog = state.catalog().await;
    let mut tracker = state.tracker.write().await;
    let participants = payload
        .participants
        .unwrap_or(tracker.current_mogi.participants);

    let race = session_engine::add_race(
        &mut tracker.current_mogi,
        &catalog,
        &payload.race,
        &payload.course,
        participants,
    )
    .inspect_err(|e| warn!("Race rejected: {}", e))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "race": race, "current": mogi_view(&tracker.current_mogi) })),
    ))
}

pub async fn update_mogi(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateMogiRequest>,
) -> Result<impl IntoResponse, Error> {
    let mut tracker = state.tracker.write().await;
    if let Some(participants) = payload.participants {
        tracker.set_participants(participants)?;
    }
    if let Some(date) = payload.date {
        tracker.set_date(date);
    }
    Ok((StatusCode::OK, Json(mogi_view(&tracker.current_mogi))))
}

pub async fn finalize_mogi(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FinalizeRequest>,
) -> Result<impl IntoResponse, Error> {
    let mut tracker = state.tracker.write().await;
    let participants = payload
        .participants
        .unwrap_or(tracker.current_mogi.participants);

    let archived = tracker
        .save_current(payload.final_rank, participants)?
        .clone();

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Mogi saved",
            "archived": archived,
            "current": mogi_view(&tracker.current_mogi),
        })),
    ))
}

/// Discards the live mogi. Requires `{"confirm": true}`; archived mogis are
/// never affected.
pub async fn reset_mogi(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ResetRequest>,
) -> impl IntoResponse {
    if !payload.confirm {
        return Error::new(StatusCode::BAD_REQUEST, "Reset must be confirmed").into_response();
    }

    let mut tracker = state.tracker.write().await;
    if tracker.current_mogi.races.is_empty() {
        return (
            StatusCode::OK,
            Json(json!({
                "message": "Nothing to reset",
                "current": mogi_view(&tracker.current_mogi),
            })),
        )
            .into_response();
    }

    let discarded = tracker.current_mogi.races.len();
    let fresh = tracker.reset_current();
    info!("Reset live mogi, discarded {} races", discarded);
    (
        StatusCode::OK,
        Json(json!({ "message": "Mogi reset", "current": mogi_view(fresh) })),
    )
        .into_response()
}
