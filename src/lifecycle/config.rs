//! Application settings.
//!
//! Loaded from `config/order-entry.toml` when present, then overridden by
//! `ORDER_ENTRY__*` environment variables (e.g. `ORDER_ENTRY__API_BASE_URL`,
//! `ORDER_ENTRY__CUSTOMER__ID`).

use crate::clients::DEFAULT_API_BASE_URL;
use crate::model::Customer;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "config/order-entry.toml";
const ENV_PREFIX: &str = "ORDER_ENTRY";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// The customer every order is placed for.
    #[serde(default)]
    pub customer: Customer,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            currency_symbol: default_currency_symbol(),
            customer: Customer::default(),
        }
    }
}

impl AppConfig {
    /// Loads from [`DEFAULT_CONFIG_FILE`] and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads from `path` (optional, any format the `config` crate detects by
    /// extension) and the environment. Environment variables win.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
