//! Plain data types exchanged with the order backend.
//!
//! Field names follow the backend's camelCase JSON. Money is carried as
//! [`Decimal`](rust_decimal::Decimal) and serialized as a JSON number.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
