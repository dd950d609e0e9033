//! # Screen State
//!
//! Everything the order-entry screen shows, plus the transitions that move it
//! from one frame to the next. Transitions take the state by value and return
//! the next state; none of them perform I/O. The [`actor`](crate::screen::actor)
//! performs the backend calls and feeds their outcomes back in here.

use crate::clients::ApiError;
use crate::draft::DraftOrder;
use crate::model::{CustomerId, NewOrder, Order, Product, ProductId};
use chrono::{DateTime, Utc};
use std::fmt::Display;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial fetches are outstanding. No controls are shown.
    Loading,
    Ready,
}

/// One-line message shown after a load or a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LoadFailed,
    OrderCreated,
    CreateFailed,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::OrderCreated)
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Notice::LoadFailed => "Failed to load initial data",
            Notice::OrderCreated => "Order created successfully",
            Notice::CreateFailed => "Failed to create order",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    pub phase: Phase,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub draft: DraftOrder,
    /// A create request is in flight.
    pub submitting: bool,
    pub notice: Option<Notice>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::loading()
    }
}

impl ScreenState {
    pub fn loading() -> Self {
        Self {
            phase: Phase::Loading,
            products: Vec::new(),
            orders: Vec::new(),
            draft: DraftOrder::default(),
            submitting: false,
            notice: None,
        }
    }

    /// Applies the joined outcome of the two initial fetches.
    ///
    /// Either both lists arrive or neither does: a failure leaves both empty.
    pub fn loaded(mut self, result: Result<(Vec<Product>, Vec<Order>), ApiError>) -> Self {
        match result {
            Ok((products, orders)) => {
                info!(products = products.len(), orders = orders.len(), "Initial data loaded");
                self.products = products;
                self.orders = orders;
            }
            Err(e) => {
                warn!(error = %e, "Initial data load failed");
                self.products.clear();
                self.orders.clear();
                self.notice = Some(Notice::LoadFailed);
            }
        }
        self.phase = Phase::Ready;
        self
    }

    fn interactive(&self) -> bool {
        self.phase == Phase::Ready && !self.submitting
    }

    pub fn can_add(&self) -> bool {
        self.interactive() && self.draft.selected_product.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.interactive() && !self.draft.is_empty()
    }

    pub fn select_product(mut self, product: Option<ProductId>) -> Self {
        if self.interactive() {
            self.draft = self.draft.select_product(product);
        }
        self
    }

    pub fn set_quantity(mut self, raw: &str) -> Self {
        if self.interactive() {
            self.draft = self.draft.set_quantity(raw);
        }
        self
    }

    pub fn add_item(mut self) -> Self {
        if self.can_add() {
            self.draft = self.draft.add_item(&self.products);
        }
        self
    }

    /// Marks a submit as in flight and returns the payload to send.
    ///
    /// Returns `None` (and the state unchanged) when submitting is disabled.
    pub fn begin_submit(
        mut self,
        customer_id: CustomerId,
        now: DateTime<Utc>,
    ) -> (Self, Option<NewOrder>) {
        if !self.can_submit() {
            return (self, None);
        }
        match self.draft.to_payload(customer_id, now) {
            Ok(payload) => {
                self.submitting = true;
                self.notice = None;
                (self, Some(payload))
            }
            Err(_) => (self, None),
        }
    }

    /// Applies the outcome of a create request started by [`begin_submit`](Self::begin_submit).
    pub fn submitted(mut self, result: Result<Order, ApiError>) -> Self {
        self.submitting = false;
        match result {
            Ok(order) => {
                self.orders.push(order);
                self.draft = self.draft.reset();
                self.notice = Some(Notice::OrderCreated);
            }
            Err(_) => {
                self.notice = Some(Notice::CreateFailed);
            }
        }
        self
    }

    pub fn dismiss(mut self) -> Self {
        self.notice = None;
        self
    }
}
