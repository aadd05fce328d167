use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::stats::{get_course_stats, get_overall_stats, get_race_stats, get_summary},
    utils::state::AppState,
};

pub fn stats_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_summary))
        .route("/overall/{participants}", get(get_overall_stats))
        .route("/races/{participants}", get(get_race_stats))
        .route("/courses", get(get_course_stats))
}
