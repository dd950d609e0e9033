//! # Draft Order
//!
//! The in-progress order being assembled on the screen. Every operation here is
//! a pure transformation: it takes the draft by value and returns the next
//! draft, so the screen state can be replaced wholesale after each user event.
//!
//! ```rust
//! use order_entry::draft::DraftOrder;
//! use order_entry::model::{Product, ProductId};
//! use rust_decimal::Decimal;
//!
//! let catalog = vec![Product::new(1, "Tea", Decimal::from(5))];
//! let draft = DraftOrder::default()
//!     .select_product(Some(ProductId(1)))
//!     .set_quantity("3")
//!     .add_item(&catalog);
//!
//! assert_eq!(draft.total(), Decimal::from(15));
//! assert_eq!(draft.quantity, 1);
//! ```

pub mod error;

pub use error::*;

use crate::model::{CustomerId, LineItem, NewOrder, OrderStatus, Product, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Form state plus the line items collected so far.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftOrder {
    pub items: Vec<LineItem>,
    pub selected_product: Option<ProductId>,
    pub quantity: u32,
}

impl Default for DraftOrder {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected_product: None,
            quantity: 1,
        }
    }
}

/// Parses raw quantity input from its leading integer, so `"2.5"` gives `2`
/// and `"3abc"` gives `3`. No leading integer, or one below `1`, gives `1`.
pub fn coerce_quantity(raw: &str) -> u32 {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return 1;
    }
    // All digits, so the only failure left is overflow.
    digits.parse::<u32>().unwrap_or(u32::MAX).max(1)
}

impl DraftOrder {
    /// Discards everything and returns the canonical empty draft.
    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn select_product(mut self, product: Option<ProductId>) -> Self {
        self.selected_product = product;
        self
    }

    /// Sets the quantity from raw user input, see [`coerce_quantity`].
    pub fn set_quantity(mut self, raw: &str) -> Self {
        self.quantity = coerce_quantity(raw);
        self
    }

    /// Appends a snapshot of the selected product and clears the form fields.
    ///
    /// Returns the draft unchanged when nothing is selected or when the
    /// selected id is not part of `catalog`.
    pub fn add_item(mut self, catalog: &[Product]) -> Self {
        let Some(product_id) = self.selected_product else {
            return self;
        };
        let Some(product) = catalog.iter().find(|p| p.id == product_id) else {
            warn!(%product_id, "Selected product is not in the catalog");
            return self;
        };

        let item = LineItem::snapshot(product, self.quantity.max(1));
        debug!(?item, "Adding line item");
        self.items.push(item);
        self.selected_product = None;
        self.quantity = 1;
        self
    }

    /// Sum of every item's `total_price`. Zero for an empty draft.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |sum, item| sum + item.total_price)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Builds the `POST /orders` payload for `customer_id`, stamped with `now`.
    ///
    /// # Errors
    /// [`DraftError::Empty`] if there are no items.
    pub fn to_payload(
        &self,
        customer_id: CustomerId,
        now: DateTime<Utc>,
    ) -> Result<NewOrder, DraftError> {
        if self.is_empty() {
            return Err(DraftError::Empty);
        }
        Ok(NewOrder {
            customer_id,
            order_date: now,
            total_amount: self.total(),
            status: OrderStatus::Pending,
            items: self.items.clone(),
        })
    }
}
