//! In-process fake order backend used by the integration tests.
#![allow(dead_code)]

pub mod gated;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, put};
use axum::{Json, Router};
use order_entry::model::{
    CustomerId, NewOrder, Order, OrderId, OrderStatus, Product, StatusUpdate,
};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct Backend {
    pub products: Arc<Mutex<Vec<Product>>>,
    pub orders: Arc<Mutex<Vec<Order>>>,
    pub received: Arc<Mutex<Vec<NewOrder>>>,
    pub content_types: Arc<Mutex<Vec<String>>>,
    pub fail_create: Arc<Mutex<bool>>,
}

impl Backend {
    pub fn seeded() -> Self {
        let backend = Self::default();
        *backend.products.lock().unwrap() = vec![
            Product::new(1, "Notebook", Decimal::from(10)),
            Product::new(2, "Pen", Decimal::from(5)),
        ];
        *backend.orders.lock().unwrap() = vec![order(100, Decimal::from(42), OrderStatus::Delivered)];
        backend
    }

    pub fn received(&self) -> Vec<NewOrder> {
        self.received.lock().unwrap().clone()
    }
}

pub fn order(id: u32, total: Decimal, status: OrderStatus) -> Order {
    Order {
        id: OrderId(id),
        customer_id: CustomerId(1),
        order_date: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
        total_amount: total,
        status,
        items: Vec::new(),
    }
}

async fn list_products(State(backend): State<Backend>) -> Json<Vec<Product>> {
    Json(backend.products.lock().unwrap().clone())
}

async fn list_orders(State(backend): State<Backend>) -> Json<Vec<Order>> {
    Json(backend.orders.lock().unwrap().clone())
}

async fn create_order(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(payload): Json<NewOrder>,
) -> Result<(StatusCode, Json<Order>), (StatusCode, String)> {
    if let Some(value) = headers.get(header::CONTENT_TYPE) {
        let value = value.to_str().unwrap_or_default().to_string();
        backend.content_types.lock().unwrap().push(value);
    }
    backend.received.lock().unwrap().push(payload.clone());

    if *backend.fail_create.lock().unwrap() {
        return Err((StatusCode::INTERNAL_SERVER_ERROR, "database unavailable".to_string()));
    }

    let mut orders = backend.orders.lock().unwrap();
    let id = orders.iter().map(|o| o.id.0).max().unwrap_or(0) + 1;
    let created = Order {
        id: OrderId(id),
        customer_id: payload.customer_id,
        order_date: payload.order_date,
        total_amount: payload.total_amount,
        status: payload.status,
        items: payload.items,
    };
    orders.push(created.clone());
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_status(
    State(backend): State<Backend>,
    Path(id): Path<u32>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<Order>, StatusCode> {
    let mut orders = backend.orders.lock().unwrap();
    let order = orders
        .iter_mut()
        .find(|o| o.id == OrderId(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    order.status = body.status;
    Ok(Json(order.clone()))
}

pub fn router(backend: Backend) -> Router {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/:id/status", put(update_status))
        .with_state(backend)
}

/// Serves `router` on an ephemeral loopback port and returns the API base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}
