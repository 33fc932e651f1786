//! Host error types

use thiserror::Error;

/// Errors reported by a [`Host`](crate::Host) implementation
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The host could not create an element
    #[error("Element creation failed: {0}")]
    ElementCreation(String),

    /// An insert/remove on the element tree was rejected
    #[error("Element tree mutation failed: {0}")]
    TreeMutation(String),

    /// An inline style or class could not be written
    #[error("Style update failed: {0}")]
    Style(String),

    /// A required environment object is missing (no document, no body, ...)
    #[error("Host object not available: {0}")]
    Unavailable(String),

    /// Generic host error
    #[error("Host error: {0}")]
    Other(String),
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, PlatformError>;
