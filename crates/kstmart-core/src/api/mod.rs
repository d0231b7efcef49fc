//! Product fetching.
//!
//! This module provides the `ProductSource` seam the cache fetches through,
//! with two implementations:
//!
//! - `ApiClient`: `GET /products` against the remote catalog (reqwest)
//! - `FileSource`: a local `products.json` document
//!
//! Both report failures as `ApiError`, which keeps caller cancellation
//! distinct from network failures.

pub mod client;
pub mod error;
pub mod file;
pub mod source;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use file::{load_products_file, FileSource};
pub use source::ProductSource;
