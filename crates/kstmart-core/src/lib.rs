//! kstmart core library.
//!
//! Product catalog logic shared by the storefront front ends: fetching and
//! caching the product list, deriving category summaries, and the small
//! immutable client state (cart, favorites, listing preferences).
//!
//! ```no_run
//! use kstmart_core::api::ApiClient;
//! use kstmart_core::cache::ProductsCache;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let cache = ProductsCache::new(ApiClient::new()?);
//! let categories = cache.categories(&CancellationToken::new()).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod models;
pub mod state;
pub mod utils;

pub use api::{ApiClient, ApiError, ProductSource};
pub use cache::ProductsCache;
pub use catalog::{aggregate, classify_group};
pub use config::Config;
pub use models::{CategoryGroup, CategorySummary, Product};
