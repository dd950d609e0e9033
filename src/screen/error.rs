//! Error types for talking to the screen actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScreenError {
    /// The screen actor is no longer receiving events.
    #[error("Screen closed")]
    Closed,

    /// The screen actor dropped the reply channel without answering.
    #[error("Screen dropped response channel")]
    Dropped,
}
