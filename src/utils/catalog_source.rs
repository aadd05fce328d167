use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{from_str, Value};
use tracing::{info, warn};

use crate::{
    models::error::MogiError,
    utils::{catalog::CourseCatalog, config::Config},
};

/// Catalog bundled into the binary, used when no other source works.
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/courses.json");

/// Somewhere a course catalog can be read from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Value, MogiError>;
}

pub struct RemoteSource {
    pub client: Client,
    pub url: String,
}

#[async_trait]
impl CatalogSource for RemoteSource {
    fn describe(&self) -> String {
        format!("url {}", self.url)
    }

    async fn fetch(&self) -> Result<Value, MogiError> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| MogiError::CatalogLoadFailure(e.to_string()))?;
        if !res.status().is_success() {
            return Err(MogiError::CatalogLoadFailure(format!(
                "{} answered {}",
                self.url,
                res.status()
            )));
        }
        let body = res
            .text()
            .await
            .map_err(|e| MogiError::CatalogLoadFailure(e.to_string()))?;
        from_str(&body).map_err(|e| MogiError::CatalogLoadFailure(e.to_string()))
    }
}

pub struct FileSource {
    pub path: PathBuf,
}

#[async_trait]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self) -> Result<Value, MogiError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| MogiError::CatalogLoadFailure(e.to_string()))?;
        from_str(&body).map_err(|e| MogiError::CatalogLoadFailure(e.to_string()))
    }
}

pub struct EmbeddedSource {
    pub json: &'static str,
}

#[async_trait]
impl CatalogSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded catalog".to_string()
    }

    async fn fetch(&self) -> Result<Value, MogiError> {
        from_str(self.json).map_err(|e| MogiError::CatalogLoadFailure(e.to_string()))
    }
}

/// Sources in fallback order: remote url, local file, embedded.
pub fn sources_from_config(config: &Config, client: &Client) -> Vec<Box<dyn CatalogSource>> {
    let mut sources: Vec<Box<dyn CatalogSource>> = Vec::new();
    if let Some(url) = &config.course_catalog_url {
        sources.push(Box::new(RemoteSource {
            client: client.clone(),
            url: url.clone(),
        }));
    }
    if let Some(path) = &config.course_catalog_path {
        sources.push(Box::new(FileSource { path: path.clone() }));
    }
    sources.push(Box::new(EmbeddedSource {
        json: EMBEDDED_CATALOG,
    }));
    sources
}

/// Returns the catalog from the first source that yields a non-empty one.
pub async fn load_catalog(sources: &[Box<dyn CatalogSource>]) -> Result<CourseCatalog, MogiError> {
    for source in sources {
        let catalog = source.fetch().await.and_then(CourseCatalog::from_json);
        match catalog {
            Ok(catalog) if !catalog.is_empty() => {
                info!(
                    "Loaded {} courses from {}",
                    catalog.courses().len(),
                    source.describe()
                );
                return Ok(catalog);
            }
            Ok(_) => warn!("Course catalog from {} is empty", source.describe()),
            Err(e) => warn!("Course catalog from {} unavailable: {}", source.describe(), e),
        }
    }
    Err(MogiError::CatalogLoadFailure(
        "no valid course source found".to_string(),
    ))
}
