//! Store Client
//!
//! Main client for the product catalog API, combining the base URL with
//! the generic HTTP helper and exposing one typed operation per command.

use super::http::JsonHttpClient;
use crate::model::{NewProduct, Product};
use anyhow::{Context, Result};
use serde_json::Value;
use url::Url;

/// Base URL of the public product catalog API.
///
/// A fixed constant on purpose: no environment override is supported.
pub const API_BASE_URL: &str = "https://fakestoreapi.com";

/// Main store API client
#[derive(Clone)]
pub struct StoreClient {
    pub http: JsonHttpClient,
    base_url: Url,
}

impl StoreClient {
    /// Create a client pointed at the production API
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client with an explicit base URL (used by tests)
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).context("Invalid API base URL")?;
        let http = JsonHttpClient::new()?;

        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Build the products collection URL
    pub fn products_url(&self) -> String {
        self.url("/products")
    }

    /// Build a single product URL.
    ///
    /// The id is whatever the user typed; it is passed through unparsed.
    pub fn product_url(&self, id: &str) -> String {
        self.url(&format!("/products/{id}"))
    }

    /// Fetch all products
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let value = self.http.get(&self.products_url()).await?;
        serde_json::from_value(value).context("Unexpected product list payload")
    }

    /// Fetch a single product by id
    pub async fn get_product(&self, id: &str) -> Result<Product> {
        let value = self.http.get(&self.product_url(id)).await?;
        serde_json::from_value(value).context("Unexpected product payload")
    }

    /// Create a product; the API echoes the created entity with its id
    pub async fn create_product(&self, new_product: &NewProduct) -> Result<Product> {
        let body = serde_json::to_value(new_product).context("Failed to serialize product")?;
        let value = self.http.post(&self.products_url(), &body).await?;
        serde_json::from_value(value).context("Unexpected product payload")
    }

    /// Delete a product by id.
    ///
    /// The API echoes the deleted entity; it is returned as raw JSON and
    /// printed as-is rather than decoded.
    pub async fn delete_product(&self, id: &str) -> Result<Value> {
        self.http.delete(&self.product_url(id)).await
    }
}
