//! Common error types for the Atrium gateway

use thiserror::Error;

/// Common result type for Atrium operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the gateway crates
///
/// CMS fetch failures deliberately do NOT appear here: they are absorbed at
/// the fetcher/repository boundary and resolved to `None`/empty collections,
/// so page assembly can always degrade to fallback content.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server error
    #[error("HTTP server error: {0}")]
    Http(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Outbound mail delivery error
    #[error("Mail error: {0}")]
    Mail(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
