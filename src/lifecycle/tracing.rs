//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by `RUST_LOG`.
//! Logs go to **stderr** so they never interleave with the screen drawn on stdout.
//!
//! ## What Gets Traced
//!
//! - **Backend calls**: one span per request (`list_products`, `create_order`, ...),
//!   an `info` line on success and an `error` line with the failure before it is
//!   returned to the caller
//! - **Screen lifecycle**: start, initial load outcome, shutdown
//! - **Events**: every dispatched [`ScreenEvent`](crate::screen::ScreenEvent) at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only failures
//! RUST_LOG=error cargo run
//!
//! # Request outcomes
//! RUST_LOG=info cargo run
//!
//! # Full payloads (`create_order called order=NewOrder { .. }`)
//! RUST_LOG=debug cargo run
//!
//! # Just the transport layer
//! RUST_LOG=order_entry::clients=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
