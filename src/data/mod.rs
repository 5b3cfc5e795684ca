//! Core data models for the shopfront client
//!
//! This module contains the types deserialized from the storefront backend
//! and the typed client that fetches them through the caching data layer.

pub mod store;

pub use store::StoreClient;

use serde::{Deserialize, Serialize};

/// A product as returned by the backend
///
/// The backend identifies documents by `_id`; serde maps that onto `id`.
/// The same shape is used for featured-list entries and the detail page,
/// matching the backend's product documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend document id
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title of the product
    pub title: String,
    /// Longer description shown on the detail page
    #[serde(default)]
    pub description: String,
    /// Price in the store currency
    pub price: f64,
    /// Image file names, resolved against the backend's `/products/` path
    #[serde(default)]
    pub images: Vec<String>,
    /// Units available; quantity selection is clamped to this
    pub stock: u32,
}

impl Product {
    /// Returns the image file selected by index, if any
    pub fn image_at(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }
}

/// A product category shown in the sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Backend document id
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name of the category
    pub name: String,
    /// Icon file name, resolved against the backend's `/category/` path
    #[serde(default)]
    pub image: String,
}
