//! Product list read from a local JSON document.
//!
//! Used for server-side rendering from a shared `products.json` and for
//! working offline. The document has the same shape as the endpoint body.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::models::{Product, ProductsResponse};

use super::{ApiError, ProductSource};

/// Read and parse a products document.
pub fn load_products_file(path: &Path) -> Result<Vec<Product>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read products file: {}", path.display()))?;

    let parsed = ProductsResponse::from_body(&contents)
        .with_context(|| format!("Failed to parse products file: {}", path.display()))?;

    let products = parsed.into_products();
    debug!(path = %path.display(), count = products.len(), "Loaded products from file");
    Ok(products)
}

/// `ProductSource` backed by a local products document.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for FileSource {
    async fn fetch_products(&self, cancel: &CancellationToken) -> Result<Vec<Product>, ApiError> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        load_products_file(&self.path).map_err(|e| ApiError::network(format!("{:#}", e), None))
    }
}
