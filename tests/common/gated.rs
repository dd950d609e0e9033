//! An [`OrderApi`] that holds `create_order` open until the test releases it.

use async_trait::async_trait;
use order_entry::clients::mock::MockOrderApi;
use order_entry::clients::{ApiError, OrderApi};
use order_entry::model::{NewOrder, Order, OrderId, OrderStatus, Product};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Clone)]
pub struct GatedOrderApi {
    inner: MockOrderApi,
    gate: Arc<Notify>,
}

impl GatedOrderApi {
    pub fn new(inner: MockOrderApi) -> Self {
        Self {
            inner,
            gate: Arc::new(Notify::new()),
        }
    }

    /// `notify_one` on this lets one pending `create_order` through.
    pub fn gate(&self) -> Arc<Notify> {
        self.gate.clone()
    }
}

#[async_trait]
impl OrderApi for GatedOrderApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.inner.list_products().await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.inner.list_orders().await
    }

    async fn create_order(&self, order: NewOrder) -> Result<Order, ApiError> {
        self.gate.notified().await;
        self.inner.create_order(order).await
    }

    async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.inner.update_order_status(id, status).await
    }
}
