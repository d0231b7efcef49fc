//! API client for the remote product catalog.
//!
//! This module provides the `ApiClient` struct for fetching the product
//! list over HTTP.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{header, Client};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::models::{Product, ProductsResponse};

use super::{ApiError, ProductSource};

// ============================================================================
// Constants
// ============================================================================

/// Default base URL of the product catalog.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Page size requested from `/products`. Large enough for the whole demo catalog.
const PRODUCTS_PAGE_LIMIT: u32 = 200;

/// API client for the product catalog.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the default catalog.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against another catalog host (mirror, test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_url(&self) -> String {
        format!("{}/products?limit={}", self.base_url, PRODUCTS_PAGE_LIMIT)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Fetch the full product list, without cancellation.
    async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.products_url();

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let response = Self::check_response(response).await?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::invalid_body(status, e))?;

        let parsed = ProductsResponse::from_body(&text).map_err(|e| ApiError::invalid_body(status, e))?;
        let products = parsed.into_products();

        debug!(url = %url, count = products.len(), "Products response received");
        Ok(products)
    }
}

#[async_trait]
impl ProductSource for ApiClient {
    async fn fetch_products(&self, cancel: &CancellationToken) -> Result<Vec<Product>, ApiError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Product fetch cancelled");
                Err(ApiError::Cancelled)
            }
            result = self.get_products() => result,
        }
    }
}
