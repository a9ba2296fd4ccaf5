//! Burble - a terminal chat viewer
//!
//! This library provides the core functionality for Burble: an immutable
//! chat store loaded from an embedded fixture, a message-passing bridge
//! between the data side and the view, an update-prompt flow, and the
//! TUI rendering logic.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bridge;
pub mod store;
pub mod tui;
pub mod update;

/// Result type alias for Burble operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Burble operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Embedded fixture could not be loaded
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Bridge channel closed on the other side
    #[error("Bridge disconnected: {0}")]
    BridgeDisconnected(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize the Burble library with logging
pub fn init() {
    tracing_subscriber::fmt::init();
}

#[cfg(test)]
mod tests;
