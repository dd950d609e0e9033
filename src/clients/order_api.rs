//! # OrderApi Trait
//!
//! The seam between the screen and the backend. The screen actor is generic
//! over this trait, so production code plugs in [`HttpOrderClient`](crate::clients::HttpOrderClient)
//! while tests plug in [`MockOrderApi`](crate::clients::mock::MockOrderApi).
use crate::clients::ApiError;
use crate::model::{NewOrder, Order, OrderId, OrderStatus, Product};
use async_trait::async_trait;
use std::sync::Arc;

/// The four backend operations. Each is one request with no retry.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /orders`
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// `POST /orders`. The backend assigns the id of the returned order.
    async fn create_order(&self, order: NewOrder) -> Result<Order, ApiError>;

    /// `PUT /orders/{id}/status`
    async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError>;
}

#[async_trait]
impl<T: OrderApi + ?Sized> OrderApi for Arc<T> {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        (**self).list_products().await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        (**self).list_orders().await
    }

    async fn create_order(&self, order: NewOrder) -> Result<Order, ApiError> {
        (**self).create_order(order).await
    }

    async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        (**self).update_order_status(id, status).await
    }
}
