//! # Order Entry
//!
//! > **A single-screen order-entry client for a REST order backend.**
//!
//! A customer picks products, builds up a draft order of priced line items,
//! submits it, and sees the orders placed so far. The screen is drawn as text
//! and driven by typed commands.
//!
//! ## 🏗️ Design
//!
//! ### Pure state, one owner
//! Everything on screen lives in a [`ScreenState`](screen::ScreenState) whose
//! transitions are plain functions (`state.add_item()`, `state.submitted(result)`).
//! A single [`ScreenActor`](screen::ScreenActor) owns that state and applies user
//! events one at a time, so no locks are needed and the draft can never be
//! edited by two events at once.
//!
//! ### Failures are values
//! Backend errors come back as [`ApiError`](clients::ApiError). The screen turns
//! any of them into one generic [`Notice`](screen::Notice); nothing is retried.
//!
//! ### The backend is a trait
//! The actor is generic over [`OrderApi`](clients::OrderApi). Production wires in
//! [`HttpOrderClient`](clients::HttpOrderClient); tests wire in
//! [`MockOrderApi`](clients::mock::MockOrderApi).
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - Products, orders, line items, customer, request payloads.
//! - [`draft`] - The draft-order accumulator and its totals.
//! - [`clients`] - `OrderApi`, the HTTP client, and the mock.
//! - [`screen`] - Screen state, the screen actor, and rendering.
//! - [`shell`] - Routing and the command loop.
//! - [`lifecycle`] - Configuration, tracing, startup and shutdown.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Talk to the default backend at http://localhost:5000/api
//! RUST_LOG=info cargo run
//!
//! # Point somewhere else
//! ORDER_ENTRY__API_BASE_URL=http://orders.internal/api cargo run
//! ```

pub mod clients;
pub mod draft;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod screen;
pub mod shell;

pub use error::AppError;
