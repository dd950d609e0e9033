//! Error types for the draft order.

use thiserror::Error;

/// Errors that can occur when turning a draft into an order payload.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    /// The draft has no line items, so there is nothing to submit.
    #[error("Draft order has no items")]
    Empty,
}
