//! Product types returned by the `/products` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric identifier for a product.
pub type ProductID = i64;

/// A single catalog product.
///
/// Values are taken as sent by the remote source. Only `id` and
/// `discountPercentage` are required; any other missing field decodes to its
/// empty value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique numeric product identifier.
    pub id: ProductID,

    /// Display title.
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Unit price in dollars.
    #[serde(default)]
    pub price: f64,

    /// Discount in percent, presumed to be in 0..=100.
    pub discount_percentage: f64,

    /// Average review rating.
    #[serde(default)]
    pub rating: f64,

    /// Units in stock.
    #[serde(default)]
    pub stock: i64,

    /// Brand name. Missing for unbranded goods such as groceries.
    #[serde(default)]
    pub brand: Option<String>,

    /// Category slug this product belongs to.
    #[serde(default)]
    pub category: String,

    /// URL of the thumbnail image.
    #[serde(default)]
    pub thumbnail: String,

    /// Full-size image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub sku: Option<String>,

    /// Free-form availability label, e.g. "In Stock" or "Low Stock".
    #[serde(default)]
    pub availability_status: Option<String>,

    #[serde(default)]
    pub meta: Option<ProductMeta>,
}

impl Product {
    /// Returns true when the discount is strictly greater than `threshold` percent.
    pub fn is_discounted_over(&self, threshold: f64) -> bool {
        self.discount_percentage > threshold
    }
}

/// Bookkeeping block attached to each product.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub barcode: Option<String>,
    pub qr_code: Option<String>,
}

/// Paginated envelope returned by product listings. Passed through unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductList {
    pub products: Vec<Product>,
    /// Total number of products matching the listing, across all pages.
    #[serde(default)]
    pub total: i64,
    /// Number of products skipped before this page.
    #[serde(default)]
    pub skip: i64,
    /// Page size the server applied.
    #[serde(default)]
    pub limit: i64,
}
