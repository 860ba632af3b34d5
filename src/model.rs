//! Product data types
//!
//! The product shape is owned by the remote API; nothing here is
//! validated locally beyond JSON decoding.

use serde::{Deserialize, Serialize};

/// Fixed description attached to products created from the command line
pub const DEFAULT_DESCRIPTION: &str = "Product added from the command line.";

/// Fixed placeholder image attached to products created from the command line
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// A product as returned by the catalog API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub image: String,
}

/// Request body for creating a product.
///
/// Title, price and category come from the command line; description and
/// image are fixed placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub image: String,
}

impl NewProduct {
    pub fn new(title: &str, price: f64, category: &str) -> Self {
        Self {
            title: title.to_string(),
            price,
            category: category.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}
