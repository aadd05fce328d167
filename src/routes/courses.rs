use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::courses::{list_courses, reload_courses, resolve_course},
    utils::state::AppState,
};

pub fn course_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_courses))
        .route("/resolve", get(resolve_course))
        .route("/reload", post(reload_courses))
}
