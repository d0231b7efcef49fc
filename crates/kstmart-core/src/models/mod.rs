//! Data models for the product catalog.
//!
//! This module contains the data structures shared by the storefront
//! front ends:
//!
//! - `Product`, `ProductsResponse`: records returned by the product endpoint
//! - `CategorySummary`: per-category aggregate derived from a product list
//! - `CategoryGroup`, `GroupFilter`: coarse grouping used by the category tabs

pub mod category;
pub mod product;

pub use category::{CategoryGroup, CategorySummary, GroupFilter};
pub use product::{Product, ProductsResponse};
