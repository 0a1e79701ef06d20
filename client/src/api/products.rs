//! Product catalog operations.
//!
//! Create and update require an authenticated session; the route gate keeps
//! their screens unreachable without one, and the service enforces the same
//! rule on its side.

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

/// A catalog product as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identifier minted by the catalog service.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in the store currency.
    pub price: f64,
    /// Hosted image for the detail view, if any.
    pub image_url: Option<String>,
}

/// Payload for creating or replacing a product.
#[derive(Clone, Debug, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
}

fn product_endpoint(id: &str) -> String {
    format!("/api/products/{id}")
}

impl ApiClient {
    /// `GET /api/products`.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let resp = self.request(Method::GET, "/api/products").send().await?;
        if !resp.status().is_success() {
            return Err(Self::error_for_status("list products", resp).await);
        }
        Self::decode("list products", resp).await
    }

    /// `GET /api/products/{id}`.
    pub async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        let resp = self
            .request(Method::GET, &product_endpoint(id))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for_status("get product", resp).await);
        }
        Self::decode("get product", resp).await
    }

    /// `POST /api/products` — requires an authenticated session.
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        let resp = self
            .request(Method::POST, "/api/products")
            .json(input)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for_status("create product", resp).await);
        }
        Self::decode("create product", resp).await
    }

    /// `PUT /api/products/{id}` — requires an authenticated session.
    pub async fn update_product(&self, id: &str, input: &ProductInput) -> Result<Product, ApiError> {
        let resp = self
            .request(Method::PUT, &product_endpoint(id))
            .json(input)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for_status("update product", resp).await);
        }
        Self::decode("update product", resp).await
    }
}
