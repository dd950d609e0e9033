//! Backend access: the [`OrderApi`] seam, its HTTP implementation, and a mock.

pub mod error;
pub mod http_client;
pub mod mock;
pub mod order_api;

pub use error::*;
pub use http_client::*;
pub use order_api::*;
