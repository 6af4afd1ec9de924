//! Configuration error types.
//!
//! # Error Handling
//!
//! Client construction validates fail-fast: [`crate::ClientBuilder`]
//! returns `Result<Client, ConfigError>` so a misconfigured client can
//! never be used to build requests.

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No transport adapter was supplied to the builder.
    #[error("No adapter was supplied. Provide a transport function before building the client.")]
    MissingAdapter,
}
