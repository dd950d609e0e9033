use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity every order is placed for.
///
/// There is exactly one customer per running screen. It is loaded from
/// configuration and handed to the screen explicitly. Missing fields fall
/// back to [`Customer::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            id: CustomerId(1),
            name: "Default Customer".to_string(),
            email: "customer@example.com".to_string(),
            phone: "(11) 99999-9999".to_string(),
        }
    }
}
