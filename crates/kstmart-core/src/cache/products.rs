use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::api::{ApiError, ProductSource};
use crate::catalog::aggregate;
use crate::models::{CategorySummary, Product};

use super::{CacheEntry, Clock, HydrationStore, SystemClock};

/// Keep a fetched product list for 5 minutes.
pub const DEFAULT_TTL_MINUTES: i64 = 5;

/// Key under which the product list is kept in the durable store.
pub const PRODUCTS_CACHE_KEY: &str = "products_cache";

type ProductsEntry = CacheEntry<Vec<Product>>;

/// Time-boxed memoization of the full product list.
///
/// Lookups go memory, then durable store, then the product source. Store
/// failures are logged and otherwise ignored: a misbehaving store acts like
/// no store at all.
///
/// Concurrent `fetch_all` calls on an empty cache are not coalesced; each
/// one issues its own request and the last to finish wins the slot.
pub struct ProductsCache {
    source: Arc<dyn ProductSource>,
    store: Option<Arc<dyn HydrationStore>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    entry: Mutex<Option<ProductsEntry>>,
}

impl ProductsCache {
    pub fn new(source: impl ProductSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            store: None,
            clock: Arc::new(SystemClock),
            ttl: Duration::minutes(DEFAULT_TTL_MINUTES),
            entry: Mutex::new(None),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Persist fetched lists to `store` and hydrate from it when memory is empty.
    pub fn with_store(mut self, store: impl HydrationStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the product list, fetching it only when no fresh copy exists.
    ///
    /// Fails with `ApiError::Cancelled` if `cancel` fires before the list is
    /// stored; nothing is cached in that case.
    pub async fn fetch_all(&self, cancel: &CancellationToken) -> Result<Vec<Product>, ApiError> {
        if let Some(products) = self.cached() {
            debug!(count = products.len(), "Serving products from cache");
            return Ok(products);
        }

        let products = match self.source.fetch_products(cancel).await {
            Ok(products) => products,
            Err(ApiError::Cancelled) => {
                debug!("Product fetch cancelled, cache left empty");
                return Err(ApiError::Cancelled);
            }
            Err(e) => {
                warn!(error = %e, status = ?e.status(), "Failed to fetch products");
                return Err(e);
            }
        };

        if cancel.is_cancelled() {
            debug!("Cancelled after response arrived, discarding products");
            return Err(ApiError::Cancelled);
        }

        self.put(products.clone());
        Ok(products)
    }

    /// Category summaries of the current product list.
    pub async fn categories(&self, cancel: &CancellationToken) -> Result<Vec<CategorySummary>, ApiError> {
        let products = self.fetch_all(cancel).await?;
        Ok(aggregate(&products))
    }

    /// Drop the cached list from memory and from the durable store.
    pub fn invalidate(&self) {
        *self.slot() = None;

        if let Some(store) = &self.store {
            if let Err(e) = store.remove(PRODUCTS_CACHE_KEY) {
                debug!(error = %e, "Failed to remove durable products cache");
            }
        }
        debug!("Products cache invalidated");
    }

    /// Expiry of the in-memory entry, if it is still fresh.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let now = self.clock.now();
        self.slot()
            .as_ref()
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| entry.expires_at)
    }

    /// Human-readable expiry of the in-memory entry, for status lines.
    pub fn expiry_display(&self) -> String {
        let now = self.clock.now();
        self.slot()
            .as_ref()
            .map(|entry| entry.expiry_display(now))
            .unwrap_or_else(|| "empty".to_string())
    }

    fn slot(&self) -> MutexGuard<'_, Option<ProductsEntry>> {
        self.entry.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn cached(&self) -> Option<Vec<Product>> {
        let now = self.clock.now();

        if let Some(entry) = self.slot().as_ref().filter(|entry| entry.is_fresh(now)) {
            return Some(entry.value.clone());
        }

        let entry = self.hydrate(now)?;
        let products = entry.value.clone();
        *self.slot() = Some(entry);
        Some(products)
    }

    fn hydrate(&self, now: DateTime<Utc>) -> Option<ProductsEntry> {
        let store = self.store.as_ref()?;

        let raw = match store.read(PRODUCTS_CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!(error = %e, "Failed to read durable products cache");
                return None;
            }
        };

        match serde_json::from_str::<ProductsEntry>(&raw) {
            Ok(entry) if entry.is_fresh(now) => {
                debug!(count = entry.value.len(), "Hydrated products from durable cache");
                Some(entry)
            }
            Ok(_) => {
                debug!("Durable products cache is stale");
                None
            }
            Err(e) => {
                debug!(error = %e, "Failed to parse durable products cache");
                None
            }
        }
    }

    fn put(&self, products: Vec<Product>) {
        let entry = CacheEntry::new(products, self.clock.now(), self.ttl);

        if let Some(store) = &self.store {
            let written = serde_json::to_string(&entry)
                .map_err(anyhow::Error::from)
                .and_then(|contents| store.write(PRODUCTS_CACHE_KEY, &contents));
            if let Err(e) = written {
                debug!(error = %e, "Failed to write durable products cache");
            }
        }

        debug!(count = entry.value.len(), expires_at = %entry.expires_at, "Cached products");
        *self.slot() = Some(entry);
    }
}

// ============================================================================
// Tests
// ============================================================================
