mod handlers;
mod models;
mod routes;
mod utils;
use std::sync::Arc;

use routes::{init_tracing, make_app};
use tokio::net::TcpListener;
use tracing::{error, info};
use utils::{config::Config, state::AppState};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = Config::init();
    init_tracing(config.log_level);

    info!("Initializing application...");
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::init(config).await);
    let app = make_app(state);

    let listener = TcpListener::bind(bind_addr.as_str()).await;
    match listener {
        Ok(listener) => {
            info!("Listening on http://{}", bind_addr);
            if let Err(err) = axum::serve(listener, app).await {
                error!("Server error: {}", err);
            }
        }
        Err(err) => error!("Failed to bind {}: {}", bind_addr, err),
    }
}
