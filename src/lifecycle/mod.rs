//! # Lifecycle & Orchestration
//!
//! Startup and shutdown of the application:
//!
//! 1. **Configuration** - [`AppConfig`] from file and environment
//! 2. **Observability** - [`setup_tracing`]
//! 3. **Wiring** - [`OrderEntryApp`] builds the backend client, spawns the
//!    screen actor with the client and customer injected, and hands out the
//!    [`ScreenClient`](crate::screen::ScreenClient)
//! 4. **Shutdown** - dropping the client closes the actor's channel, then the
//!    task is awaited
//!
//! ## Dependency Injection via `run`
//!
//! The screen actor is created without its dependencies and receives them when
//! its loop starts (`actor.run(api, customer)`). Tests use the same entry point
//! with a [`MockOrderApi`](crate::clients::mock::MockOrderApi) in place of the
//! HTTP client.

pub mod app;
pub mod config;
pub mod tracing;

pub use self::app::*;
pub use self::config::*;
pub use self::tracing::*;
