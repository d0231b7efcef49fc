//! Category aggregation over a flat product list.
//!
//! Everything here is a pure function of its input: the storefront calls
//! these on every render with whatever list the cache currently holds.
//!
//! - `aggregate`: one `CategorySummary` per category, in first-seen order
//! - `classify_group`: map a category key onto a `CategoryGroup` tab
//! - `products_by_category`, `products_in_category`, `filter_by_group`

pub mod aggregate;
pub mod group;

pub use aggregate::{aggregate, products_by_category, products_in_category};
pub use group::{classify_group, filter_by_group};
