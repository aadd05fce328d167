use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::mogi::{add_race, finalize_mogi, get_current, reset_mogi, update_mogi},
    utils::state::AppState,
};

pub fn mogi_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_current).patch(update_mogi))
        .route("/races", post(add_race))
        .route("/finalize", post(finalize_mogi))
        .route("/reset", post(reset_mogi))
}
