use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A product draft: everything a product carries except the id and the
/// timestamps the remote store assigns on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    pub sku: Option<String>,

    #[serde(rename = "image_url")]
    pub image_url: Option<String>,
}

/// Partial patch: only the populated fields are written. `updated_at` is
/// stamped by the store service right before the remote call.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    pub product_id: i32,

    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,

    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: Option<String>,

    pub sku: Option<String>,

    #[serde(rename = "image_url")]
    pub image_url: Option<String>,

    #[serde(rename = "updated_at")]
    pub updated_at: Option<NaiveDateTime>,
}

impl UpdateProductRequest {
    /// An empty patch for the given product id.
    pub fn for_id(product_id: i32) -> Self {
        Self {
            product_id,
            name: None,
            description: None,
            price: None,
            stock: None,
            category: None,
            sku: None,
            image_url: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchProductsRequest {
    #[serde(default)]
    pub search: String,

    pub category: Option<String>,
}
