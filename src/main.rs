//! # Order Entry
//!
//! Entry point: loads configuration, resolves the requested path to its screen,
//! starts the screen against the configured backend, and runs the command loop
//! on stdin/stdout.
//!
//! ```bash
//! order-entry        # same as `order-entry /`
//! order-entry /
//! ```

use order_entry::lifecycle::{setup_tracing, AppConfig, OrderEntryApp};
use order_entry::shell::{self, Route};
use order_entry::AppError;
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_tracing();

    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let Some(route) = shell::resolve(&path) else {
        error!(%path, "No screen for path");
        return Err(AppError::UnknownRoute(path));
    };

    let config = AppConfig::load()?;
    info!(?route, customer_id = %config.customer.id, "Starting order entry");

    match route {
        Route::OrderEntry => {
            let app = OrderEntryApp::start(&config)?;
            let result = shell::run(
                &app.screen,
                BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
                &config.currency_symbol,
            )
            .await;

            app.shutdown().await?;
            result
        }
    }
}
