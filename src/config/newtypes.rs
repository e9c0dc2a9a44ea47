//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated 3scale provider key (access token).
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ProviderKey(*****)` instead of the actual credential.
///
/// # Example
///
/// ```rust
/// use threescale_api::ProviderKey;
///
/// let key = ProviderKey::new("my-provider-key").unwrap();
/// assert_eq!(key.as_ref(), "my-provider-key");
/// assert_eq!(format!("{:?}", key), "ProviderKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderKey(String);

impl ProviderKey {
    /// Creates a new validated provider key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyProviderKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyProviderKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ProviderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProviderKey(*****)")
    }
}

/// A validated 3scale admin portal endpoint URL.
///
/// This newtype validates that the URL has an `http` or `https` scheme and a
/// non-empty host. A trailing slash is trimmed so the endpoint can be joined
/// with resource paths directly.
///
/// # Example
///
/// ```rust
/// use threescale_api::AdminEndpoint;
///
/// let endpoint = AdminEndpoint::new("https://acme-admin.3scale.net").unwrap();
/// assert_eq!(endpoint.scheme(), "https");
/// assert_eq!(endpoint.host(), "acme-admin.3scale.net");
///
/// // Ports are accepted
/// let endpoint = AdminEndpoint::new("http://localhost:3000").unwrap();
/// assert_eq!(endpoint.host(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminEndpoint {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl AdminEndpoint {
    /// Creates a new validated admin endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidEndpoint { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host portion of the URL.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for AdminEndpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Serialize for AdminEndpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for AdminEndpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_key_rejects_empty_string() {
        let result = ProviderKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyProviderKey)));
    }

    #[test]
    fn test_provider_key_masks_value_in_debug() {
        let key = ProviderKey::new("super-secret-token").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ProviderKey(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_admin_endpoint_parses_scheme_and_host() {
        let endpoint = AdminEndpoint::new("https://acme-admin.3scale.net").unwrap();
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host(), "acme-admin.3scale.net");
        assert_eq!(endpoint.as_ref(), "https://acme-admin.3scale.net");
    }

    #[test]
    fn test_admin_endpoint_trims_trailing_slash() {
        let endpoint = AdminEndpoint::new("https://acme-admin.3scale.net/").unwrap();
        assert_eq!(endpoint.as_ref(), "https://acme-admin.3scale.net");
    }

    #[test]
    fn test_admin_endpoint_accepts_port() {
        let endpoint = AdminEndpoint::new("http://localhost:3000").unwrap();
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.host(), "localhost");
        assert_eq!(endpoint.as_ref(), "http://localhost:3000");
    }

    #[test]
    fn test_admin_endpoint_rejects_invalid() {
        // No scheme
        assert!(AdminEndpoint::new("acme-admin.3scale.net").is_err());

        // Empty host
        assert!(AdminEndpoint::new("https://").is_err());

        // Non-http scheme
        assert!(AdminEndpoint::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_admin_endpoint_round_trip_serialization() {
        let original = AdminEndpoint::new("https://acme-admin.3scale.net").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#""https://acme-admin.3scale.net""#);
        let restored: AdminEndpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_admin_endpoint_deserialization_rejects_invalid() {
        let result: Result<AdminEndpoint, _> = serde_json::from_str(r#""no-scheme-here""#);
        assert!(result.is_err());
    }
}
