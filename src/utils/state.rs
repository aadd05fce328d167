use std::sync::Arc;

use reqwest::Client;
use tokio::sync::RwLock;
use tracing::warn;

use crate::{
    models::{error::MogiError, tracker::TrackerState},
    utils::{
        catalog::CourseCatalog,
        catalog_source::{load_catalog, sources_from_config},
        config::Config,
    },
};

pub struct AppState {
    pub config: Config,
    pub http_client: Client,
    pub catalog: RwLock<Arc<CourseCatalog>>,
    pub tracker: RwLock<TrackerState>,
}

impl AppState {
    pub fn new(config: Config, http_client: Client, catalog: CourseCatalog) -> Self {
        AppState {
            config,
            http_client,
            catalog: RwLock::new(Arc::new(catalog)),
            tracker: RwLock::new(TrackerState::new()),
        }
    }

    /// Loads the catalog from the configured sources. A failed load leaves
    /// the service running with an empty catalog.
    pub async fn init(config: Config) -> Self {
        let http_client = Client::new();
        let sources = sources_from_config(&config, &http_client);
        let catalog = load_catalog(&sources).await.unwrap_or_else(|e| {
            warn!("Starting without a course catalog: {}", e);
            CourseCatalog::default()
        });
        Self::new(config, http_client, catalog)
    }

    pub async fn catalog(&self) -> Arc<CourseCatalog> {
        self.catalog.read().await.clone()
    }

    /// Rebuilds the catalog and swaps it in; the old one stays on failure.
    pub async fn reload_catalog(&self) -> Result<Arc<CourseCatalog>, MogiError> {
        let sources = sources_from_config(&self.config, &self.http_client);
        let catalog = Arc::new(load_catalog(&sources).await?);
        *self.catalog.write().await = catalog.clone();
        Ok(catalog)
    }
}
