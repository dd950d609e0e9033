//! # HTTP Order Client
//!
//! [`OrderApi`] over HTTP/JSON with `reqwest`. Every call is a single request:
//! no retry, no timeout override, no auth headers. Failures are logged here and
//! then handed back to the caller untouched.
use crate::clients::{ApiError, OrderApi};
use crate::model::{NewOrder, Order, OrderId, OrderStatus, Product, StatusUpdate};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone)]
pub struct HttpOrderClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpOrderClient {
    /// Builds a client rooted at `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(%status, "Response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl OrderApi for HttpOrderClient {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let products: Vec<Product> = self
            .send(self.http.get(self.url("/products")))
            .await
            .inspect_err(|e| error!(error = %e, "Failed to fetch products"))?;
        info!(count = products.len(), "Fetched products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let orders: Vec<Order> = self
            .send(self.http.get(self.url("/orders")))
            .await
            .inspect_err(|e| error!(error = %e, "Failed to fetch orders"))?;
        info!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }

    #[instrument(skip(self, order), fields(items = order.items.len()))]
    async fn create_order(&self, order: NewOrder) -> Result<Order, ApiError> {
        debug!(?order, "create_order called");
        let created: Order = self
            .send(self.http.post(self.url("/orders")).json(&order))
            .await
            .inspect_err(|e| error!(error = %e, "Failed to create order"))?;
        info!(order_id = %created.id, "Order created");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let path = format!("/orders/{}/status", id);
        let updated: Order = self
            .send(self.http.put(self.url(&path)).json(&StatusUpdate { status }))
            .await
            .inspect_err(|e| error!(order_id = %id, error = %e, "Failed to update order status"))?;
        info!(order_id = %updated.id, status = %updated.status, "Order status updated");
        Ok(updated)
    }
}
