//! Configuration types for the 3scale API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for communication with a 3scale admin portal.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ThreeScaleConfig`]: The main configuration struct holding all client settings
//! - [`ThreeScaleConfigBuilder`]: A builder for constructing [`ThreeScaleConfig`] instances
//! - [`AdminEndpoint`]: A validated admin portal URL
//! - [`ProviderKey`]: A validated provider key newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use threescale_api::{AdminEndpoint, ProviderKey, ThreeScaleConfig};
//!
//! let config = ThreeScaleConfig::builder()
//!     .endpoint(AdminEndpoint::new("https://acme-admin.3scale.net").unwrap())
//!     .provider_key(ProviderKey::new("my-provider-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AdminEndpoint, ProviderKey};

use crate::error::ConfigError;

/// Configuration for the 3scale API client.
///
/// This struct holds everything the client needs at construction time: the
/// admin portal endpoint, the provider credential, and the TLS verification
/// toggle. All of it is fixed once the client is built.
///
/// # Thread Safety
///
/// `ThreeScaleConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use threescale_api::{AdminEndpoint, ProviderKey, ThreeScaleConfig};
///
/// let config = ThreeScaleConfig::builder()
///     .endpoint(AdminEndpoint::new("https://acme-admin.3scale.net").unwrap())
///     .provider_key(ProviderKey::new("key").unwrap())
///     .verify_ssl(false)
///     .build()
///     .unwrap();
///
/// assert!(!config.verify_ssl());
/// ```
#[derive(Clone, Debug)]
pub struct ThreeScaleConfig {
    endpoint: AdminEndpoint,
    provider_key: ProviderKey,
    verify_ssl: bool,
}

impl ThreeScaleConfig {
    /// Creates a new builder for constructing a `ThreeScaleConfig`.
    #[must_use]
    pub fn builder() -> ThreeScaleConfigBuilder {
        ThreeScaleConfigBuilder::new()
    }

    /// Returns the admin portal endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &AdminEndpoint {
        &self.endpoint
    }

    /// Returns the provider key.
    #[must_use]
    pub const fn provider_key(&self) -> &ProviderKey {
        &self.provider_key
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }
}

// Verify ThreeScaleConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ThreeScaleConfig>();
};

/// Builder for constructing [`ThreeScaleConfig`] instances.
///
/// Required fields are `endpoint` and `provider_key`. TLS verification
/// defaults to enabled.
///
/// # Example
///
/// ```rust
/// use threescale_api::{AdminEndpoint, ProviderKey, ThreeScaleConfig};
///
/// let config = ThreeScaleConfig::builder()
///     .endpoint(AdminEndpoint::new("http://localhost:3000").unwrap())
///     .provider_key(ProviderKey::new("key").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ThreeScaleConfigBuilder {
    endpoint: Option<AdminEndpoint>,
    provider_key: Option<ProviderKey>,
    verify_ssl: Option<bool>,
}

impl ThreeScaleConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the admin portal endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: AdminEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the provider key (required).
    #[must_use]
    pub fn provider_key(mut self, key: ProviderKey) -> Self {
        self.provider_key = Some(key);
        self
    }

    /// Enables or disables TLS certificate verification (default: enabled).
    ///
    /// Disabling verification is only appropriate for self-signed
    /// development instances.
    #[must_use]
    pub const fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` or
    /// `provider_key` was not set.
    pub fn build(self) -> Result<ThreeScaleConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;
        let provider_key = self.provider_key.ok_or(ConfigError::MissingRequiredField {
            field: "provider_key",
        })?;

        Ok(ThreeScaleConfig {
            endpoint,
            provider_key,
            verify_ssl: self.verify_ssl.unwrap_or(true),
        })
    }
}
