//! # Mock Backend & Testing Guide
//!
//! [`MockOrderApi`] implements [`OrderApi`] entirely in memory. Tests queue the
//! responses they want the "backend" to give, hand a clone of the mock to the
//! code under test, and finally call [`verify`](MockOrderApi::verify) to make
//! sure every queued response was consumed.
//!
//! ## When to use the Mock vs the HTTP client
//!
//! | Feature | MockOrderApi | HttpOrderClient + fake server |
//! |---------|--------------|-------------------------------|
//! | **Speed** | Instant (in-memory) | Fast (loopback socket) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **Covers** | Screen logic around the API | Wire format, paths, status codes |
//! | **Error Injection** | Easy (`return_err`) | Needs a handler that fails |
//!
//! ## Example
//!
//! ```rust
//! use order_entry::clients::mock::MockOrderApi;
//! use order_entry::clients::{ApiError, OrderApi};
//! use order_entry::model::Product;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockOrderApi::new();
//!     mock.expect_list_products()
//!         .return_ok(vec![Product::new(1, "Tea", Decimal::from(5))]);
//!     mock.expect_list_orders()
//!         .return_err(ApiError::Transport("connection refused".to_string()));
//!
//!     let api = mock.clone();
//!     assert_eq!(api.list_products().await.unwrap().len(), 1);
//!     assert!(api.list_orders().await.is_err());
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Matching
//!
//! Expectations are matched by operation, first-in first-out per operation.
//! This lets the two initial fetches run concurrently without the test caring
//! which of them reaches the mock first. A call with no matching expectation
//! panics.

use crate::clients::{ApiError, OrderApi};
use crate::model::{NewOrder, Order, OrderId, OrderStatus, Product};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A queued response for one backend operation.
enum Expectation {
    ListProducts(Result<Vec<Product>, ApiError>),
    ListOrders(Result<Vec<Order>, ApiError>),
    CreateOrder(Result<Order, ApiError>),
    UpdateStatus {
        id: OrderId,
        response: Result<Order, ApiError>,
    },
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    created: Vec<NewOrder>,
    status_updates: Vec<(OrderId, OrderStatus)>,
}

/// An in-memory [`OrderApi`] with expectation tracking.
///
/// Clones share the same queue and the same record of received payloads.
#[derive(Clone, Default)]
pub struct MockOrderApi {
    state: Arc<Mutex<MockState>>,
}

impl MockOrderApi {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list_products` call.
    pub fn expect_list_products(&self) -> ExpectationBuilder<Vec<Product>> {
        ExpectationBuilder::new(self.state.clone(), Expectation::ListProducts)
    }

    /// Expects a `list_orders` call.
    pub fn expect_list_orders(&self) -> ExpectationBuilder<Vec<Order>> {
        ExpectationBuilder::new(self.state.clone(), Expectation::ListOrders)
    }

    /// Expects a `create_order` call.
    pub fn expect_create_order(&self) -> ExpectationBuilder<Order> {
        ExpectationBuilder::new(self.state.clone(), Expectation::CreateOrder)
    }

    /// Expects an `update_order_status` call for `id`.
    pub fn expect_update_status(&self, id: OrderId) -> ExpectationBuilder<Order> {
        ExpectationBuilder::new(self.state.clone(), move |response| {
            Expectation::UpdateStatus { id, response }
        })
    }

    /// Every payload received by `create_order`, in call order.
    pub fn created_orders(&self) -> Vec<NewOrder> {
        self.state.lock().unwrap().created.clone()
    }

    /// Every `(id, status)` received by `update_order_status`, in call order.
    pub fn status_updates(&self) -> Vec<(OrderId, OrderStatus)> {
        self.state.lock().unwrap().status_updates.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    /// Removes the first queued expectation accepted by `pick`.
    fn take<T>(
        &self,
        operation: &str,
        pick: impl Fn(&Expectation) -> bool,
        unwrap: impl FnOnce(Expectation) -> Option<Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        let mut state = self.state.lock().unwrap();
        let position = state.expectations.iter().position(pick);
        let expectation = position.and_then(|i| state.expectations.remove(i));
        drop(state);

        match expectation.and_then(unwrap) {
            Some(response) => response,
            None => panic!("Unexpected {} call", operation),
        }
    }
}

/// Builder that queues the response for one expected call.
pub struct ExpectationBuilder<T> {
    state: Arc<Mutex<MockState>>,
    wrap: Box<dyn FnOnce(Result<T, ApiError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    fn new(
        state: Arc<Mutex<MockState>>,
        wrap: impl FnOnce(Result<T, ApiError>) -> Expectation + Send + 'static,
    ) -> Self {
        Self {
            state,
            wrap: Box::new(wrap),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        let expectation = (self.wrap)(Ok(value));
        self.state.lock().unwrap().expectations.push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        let expectation = (self.wrap)(Err(error));
        self.state.lock().unwrap().expectations.push_back(expectation);
    }
}

#[async_trait]
impl OrderApi for MockOrderApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.take(
            "list_products",
            |e| matches!(e, Expectation::ListProducts(_)),
            |e| match e {
                Expectation::ListProducts(response) => Some(response),
                _ => None,
            },
        )
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.take(
            "list_orders",
            |e| matches!(e, Expectation::ListOrders(_)),
            |e| match e {
                Expectation::ListOrders(response) => Some(response),
                _ => None,
            },
        )
    }

    async fn create_order(&self, order: NewOrder) -> Result<Order, ApiError> {
        self.state.lock().unwrap().created.push(order);
        self.take(
            "create_order",
            |e| matches!(e, Expectation::CreateOrder(_)),
            |e| match e {
                Expectation::CreateOrder(response) => Some(response),
                _ => None,
            },
        )
    }

    async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.state.lock().unwrap().status_updates.push((id, status));
        self.take(
            "update_order_status",
            |e| matches!(e, Expectation::UpdateStatus { id: expected, .. } if *expected == id),
            |e| match e {
                Expectation::UpdateStatus { response, .. } => Some(response),
                _ => None,
            },
        )
    }
}
