use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::{
    handlers::history::{delete_history, get_history},
    utils::state::AppState,
};

pub fn history_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_history))
        .route("/{id}", delete(delete_history))
}
