/// Orders, their line items, and the payloads sent to create or update them.
///
/// An [`Order`] is always created server-side: the client only ever builds a
/// [`NewOrder`] and receives the stored order (with its id) back.
use crate::model::{CustomerId, Product, ProductId};
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of an order as reported by the backend.
///
/// Values outside the known set are kept verbatim in [`OrderStatus::Other`]
/// so one unfamiliar status never rejects the whole order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    #[serde(untagged)]
    Other(String),
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(name) => name.as_str(),
        };
        f.write_str(name)
    }
}

/// One product/quantity/price snapshot inside a draft or a stored order.
///
/// `total_price` is fixed when the item is built and never follows later
/// price changes of the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl LineItem {
    /// Captures `product` at its current price.
    pub fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            unit_price: product.price,
            total_price: product.price * Decimal::from(quantity),
        }
    }
}

/// Accepts RFC 3339 timestamps and offset-less ones such as
/// `2024-03-05T14:30:00`, which are read as UTC.
fn lenient_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(stamp) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(stamp.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("invalid orderDate {:?}: {}", raw, e)))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    #[serde(deserialize_with = "lenient_utc")]
    pub order_date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Payload for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub order_date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub items: Vec<LineItem>,
}

/// Payload for `PUT /orders/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_line_item_snapshot_multiplies_price() {
        let product = Product::new(3, "Widget", Decimal::new(250, 2));
        let item = LineItem::snapshot(&product, 4);

        assert_eq!(item.product_id, ProductId(3));
        assert_eq!(item.product_name, "Widget");
        assert_eq!(item.unit_price, Decimal::new(250, 2));
        assert_eq!(item.total_price, Decimal::from(10));
    }

    #[test]
    fn test_order_decodes_without_items() {
        let json = r#"{
            "id": 12,
            "customerId": 1,
            "orderDate": "2024-03-05T14:30:00Z",
            "totalAmount": 35,
            "status": "Shipped"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.id, OrderId(12));
        assert_eq!(order.customer_id, CustomerId(1));
        assert_eq!(order.total_amount, Decimal::from(35));
        assert_eq!(order.status, OrderStatus::Shipped);
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_order_date_without_offset_is_read_as_utc() {
        let json = r#"[{
            "id": 3,
            "customerId": 1,
            "orderDate": "2024-03-05T14:30:00",
            "totalAmount": 10,
            "status": "Pending"
        }, {
            "id": 4,
            "customerId": 1,
            "orderDate": "2024-03-06T08:15:00.1234567",
            "totalAmount": 12.5,
            "status": "Pending"
        }, {
            "id": 5,
            "customerId": 1,
            "orderDate": "2024-03-07T10:00:00-03:00",
            "totalAmount": 1,
            "status": "Pending"
        }]"#;
        let orders: Vec<Order> = serde_json::from_str(json).unwrap();

        assert_eq!(orders[0].order_date, Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap());
        assert_eq!(orders[1].order_date.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-06 08:15:00");
        assert_eq!(orders[2].order_date, Utc.with_ymd_and_hms(2024, 3, 7, 13, 0, 0).unwrap());
    }

    #[test]
    fn test_garbage_order_date_is_rejected() {
        let json = r#"{"id":1,"customerId":1,"orderDate":"yesterday","totalAmount":1,"status":"Pending"}"#;
        let err = serde_json::from_str::<Order>(json).unwrap_err();
        assert!(err.to_string().contains("invalid orderDate"));
    }

    #[test]
    fn test_unknown_status_is_kept_verbatim() {
        let json = r#"{
            "id": 9,
            "customerId": 1,
            "orderDate": "2024-03-05T14:30:00Z",
            "totalAmount": 5,
            "status": "Completed"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.status, OrderStatus::Other("Completed".to_string()));
        assert_eq!(order.status.to_string(), "Completed");
        assert_eq!(serde_json::to_value(&order.status).unwrap(), "Completed");
    }

    #[test]
    fn test_new_order_uses_camel_case_fields() {
        let product = Product::new(1, "Tea", Decimal::from(5));
        let payload = NewOrder {
            customer_id: CustomerId(1),
            order_date: Utc::now(),
            total_amount: Decimal::from(15),
            status: OrderStatus::Pending,
            items: vec![LineItem::snapshot(&product, 3)],
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["customerId"], 1);
        assert_eq!(value["status"], "Pending");
        assert!(value["orderDate"].is_string());
        assert_eq!(value["items"][0]["productName"], "Tea");
        assert_eq!(value["items"][0]["quantity"], 3);
    }

    #[test]
    fn test_status_update_body() {
        let body = StatusUpdate {
            status: OrderStatus::Delivered,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"Delivered"}"#
        );
    }
}
