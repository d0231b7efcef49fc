//! Product list caching.
//!
//! This module provides the `ProductsCache` that sits between the
//! storefront and the product endpoint. A fetched list is served from
//! memory for 5 minutes by default, and optionally mirrored to a durable
//! `HydrationStore` so a restarted process can reuse it.
//!
//! - `ProductsCache`: `fetch_all`, `categories`, `invalidate`
//! - `CacheEntry`: value plus expiry instant
//! - `Clock`: time source for expiry checks
//! - `FileStore`, `MemoryStore`: durable store implementations

pub mod entry;
pub mod products;
pub mod store;

pub use entry::{CacheEntry, Clock, ManualClock, SystemClock};
pub use products::{ProductsCache, DEFAULT_TTL_MINUTES, PRODUCTS_CACHE_KEY};
pub use store::{FileStore, HydrationStore, MemoryStore};
