//! Error types for pageslide

use pageslide_platform::PlatformError;
use thiserror::Error;

/// Errors that can occur while building or tearing down a page slider
#[derive(Error, Debug)]
pub enum SliderError {
    /// The slide container is not attached, so it cannot be wrapped
    #[error("Slide container has no parent element to wrap it in")]
    DetachedContainer,

    /// An option is outside its accepted range
    #[error("Invalid option `{name}`: {reason}")]
    InvalidOption {
        /// Option key as written in configuration
        name: &'static str,
        /// What is wrong with the value
        reason: String,
    },

    /// Options could not be parsed
    #[error("Failed to parse slider options: {0}")]
    Options(#[from] serde_json::Error),

    /// Host error (element tree, styles, ...)
    #[error("Host error: {0}")]
    Platform(#[from] PlatformError),
}

/// Result type for pageslide operations
pub type Result<T> = std::result::Result<T, SliderError>;
