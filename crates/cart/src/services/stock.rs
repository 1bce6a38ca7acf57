//! Stock and product lookups against the catalog API.
//!
//! [`HttpStockService`] talks to a plain JSON REST API
//! (`GET {base}/stock/{id}` and `GET {base}/products/{id}`). Product
//! attributes are cached with `moka` (5-minute TTL) because the cart copies
//! them once at insertion; stock quantities are never cached - every
//! mutation wants a live number.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use rocket_shoes_core::{Product, ProductId, Stock};

use crate::config::CartConfig;

/// Product attribute cache size.
const PRODUCT_CACHE_CAPACITY: u64 = 1000;

/// Product attribute cache TTL.
const PRODUCT_CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Errors that can occur when querying the catalog API.
#[derive(Debug, Error)]
pub enum StockError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Stock and product lookups, as the cart store consumes them.
///
/// The store is the only caller and runs single-threaded, so the trait
/// futures carry no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait StockService {
    /// Available stock for a product.
    async fn stock(&self, id: ProductId) -> Result<Stock, StockError>;

    /// Display attributes for a product.
    async fn product(&self, id: ProductId) -> Result<Product, StockError>;
}

/// Catalog API client over HTTP.
#[derive(Clone)]
pub struct HttpStockService {
    inner: Arc<HttpStockServiceInner>,
}

struct HttpStockServiceInner {
    client: reqwest::Client,
    base_url: String,
    products: Cache<ProductId, Product>,
}

impl HttpStockService {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &CartConfig) -> Self {
        let products = Cache::builder()
            .max_capacity(PRODUCT_CACHE_CAPACITY)
            .time_to_live(PRODUCT_CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(HttpStockServiceInner {
                client: reqwest::Client::new(),
                base_url: config.api_url.trim_end_matches('/').to_string(),
                products,
            }),
        }
    }

    /// Execute a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StockError> {
        let url = format!("{}/{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StockError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

impl StockService for HttpStockService {
    async fn stock(&self, id: ProductId) -> Result<Stock, StockError> {
        debug!(%id, "fetching stock");
        self.get_json(&format!("stock/{id}")).await
    }

    async fn product(&self, id: ProductId) -> Result<Product, StockError> {
        if let Some(product) = self.inner.products.get(&id).await {
            debug!(%id, "product cache hit");
            return Ok(product);
        }

        let product: Product = self.get_json(&format!("products/{id}")).await?;
        self.inner.products.insert(id, product.clone()).await;
        Ok(product)
    }
}
