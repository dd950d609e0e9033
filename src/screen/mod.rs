//! The order-entry screen: state, the actor that owns it, and its text rendering.
//!
//! - [`ScreenState`] - what is on screen, with pure transitions.
//! - [`ScreenActor`] / [`ScreenClient`] - sequential event processing.
//! - [`render`] - draws a state as text.

pub mod actor;
pub mod error;
pub mod render;
pub mod state;

pub use actor::*;
pub use error::*;
pub use render::render;
pub use state::*;
