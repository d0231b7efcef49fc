use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// A catalog product as returned by the remote endpoint.
///
/// Only the fields the storefront reads are modelled; anything else in the
/// payload (rating, brand, description...) is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Product {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    // Absent or null category groups under the empty key
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub images: Vec<String>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Stock on hand, with a missing value counted as zero.
    pub fn stock_or_zero(&self) -> u64 {
        u64::from(self.stock.unwrap_or(0))
    }

    /// The image a listing should show: the thumbnail, else the first image.
    /// Empty strings count as missing.
    pub fn display_image(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.images.first().map(String::as_str).filter(|i| !i.is_empty()))
    }
}

/// Envelope of `GET /products`.
///
/// `products` is held as raw JSON so that a missing or mistyped field
/// degrades to an empty list instead of failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    products: serde_json::Value,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

impl ProductsResponse {
    /// Parse a response body. Fails only when the body is not a JSON object.
    pub fn from_body(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Extract the product list.
    ///
    /// Returns an empty list when `products` is missing or not an array.
    /// Individual entries that do not look like a product are skipped.
    pub fn into_products(self) -> Vec<Product> {
        let serde_json::Value::Array(items) = self.products else {
            if !self.products.is_null() {
                warn!("Response field `products` is not an array, treating as empty");
            }
            return Vec::new();
        };

        let total = items.len();
        let products: Vec<Product> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();

        if products.len() != total {
            warn!(
                skipped = total - products.len(),
                total, "Skipped malformed product entries"
            );
        }
        products
    }
}
