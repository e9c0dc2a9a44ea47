//! Error types for client configuration.
//!
//! This module contains the error type returned by configuration
//! constructors and the [`ThreeScaleConfigBuilder`](crate::ThreeScaleConfigBuilder).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use threescale_api::{ConfigError, ProviderKey};
//!
//! let result = ProviderKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyProviderKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The provider key cannot be empty.
    #[error("Provider key cannot be empty. Please provide a valid 3scale provider key or access token.")]
    EmptyProviderKey,

    /// The admin endpoint URL is invalid.
    #[error("Invalid admin endpoint '{url}'. Expected a URL with scheme and host (e.g., 'https://acme-admin.3scale.net').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
