use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::data::{export_data, import_data},
    utils::state::AppState,
};

pub fn data_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/export", get(export_data))
        .route("/import", post(import_data))
}
