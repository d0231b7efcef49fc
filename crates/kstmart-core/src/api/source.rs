use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::models::Product;

use super::ApiError;

/// Anything that can produce the full product list.
///
/// Implementations must return `ApiError::Cancelled` once `cancel` fires,
/// never a network error or a partial list.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self, cancel: &CancellationToken) -> Result<Vec<Product>, ApiError>;
}
