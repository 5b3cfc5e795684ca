//! Typed client for the storefront backend API
//!
//! Wraps the caching data loader with one method per endpoint, each carrying
//! the cache key and TTL its view uses.

use crate::cache::CacheKey;
use crate::config::Config;
use crate::fetch::{DataLoader, FetchError};

use super::{Category, Product};

/// Featured products change rarely; cached for 10 hours
const FEATURED_TTL_MS: u64 = 10 * 60 * 60 * 1000;

/// Categories are near-static; cached for 24 hours
const CATEGORIES_TTL_MS: u64 = 24 * 60 * 60 * 1000;

/// Individual products carry live stock; cached for 5 minutes
const PRODUCT_TTL_MS: u64 = 5 * 60 * 1000;

/// Client for the storefront backend endpoints
#[derive(Debug, Clone)]
pub struct StoreClient {
    loader: DataLoader,
}

impl StoreClient {
    /// Creates a client for the configured backend
    pub fn new(config: &Config) -> Self {
        Self {
            loader: DataLoader::new(config.backend_url.clone()),
        }
    }

    /// Creates a client over an existing loader (shared cache)
    pub fn with_loader(loader: DataLoader) -> Self {
        Self { loader }
    }

    /// Fetches the featured products list (`GET /products/featured`)
    pub async fn fetch_featured(&self) -> Result<Vec<Product>, FetchError> {
        let key = CacheKey::new(["products", "featured"]);
        self.loader
            .get("/products/featured", &key, FEATURED_TTL_MS)
            .await
    }

    /// Fetches all categories (`GET /category`)
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let key = CacheKey::new(["categories"]);
        self.loader.get("/category", &key, CATEGORIES_TTL_MS).await
    }

    /// Fetches a single product by id (`GET /products/:id`)
    pub async fn fetch_product(&self, id: &str) -> Result<Product, FetchError> {
        let key = CacheKey::new(["products", id]);
        let path = format!("/products/{}", id);
        self.loader.get(&path, &key, PRODUCT_TTL_MS).await
    }

    /// Resolves a product image file name to its full URL
    pub fn product_image_url(&self, file: &str) -> String {
        format!("{}/products/{}", self.loader.backend_url(), file)
    }

    /// Resolves a category icon file name to its full URL
    pub fn category_image_url(&self, file: &str) -> String {
        format!("{}/category/{}", self.loader.backend_url(), file)
    }
}
