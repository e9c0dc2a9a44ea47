//! Error types for the HTTP transport.
//!
//! The transport maps response status codes to semantic error variants:
//!
//! - **2xx / 422**: the body is decoded and returned (422 carries validation
//!   errors the caller may want to inspect)
//! - **403**: [`HttpError::Forbidden`]
//! - **404**: [`HttpError::NotFound`]
//! - **anything else**: [`HttpError::UnhandledResponse`]; the transport fails
//!   loudly rather than guessing
//!
//! # Example
//!
//! ```rust,ignore
//! match client.get("/admin/api/services/42", None).await {
//!     Ok(body) => println!("{body}"),
//!     Err(e) if e.is_not_found() => println!("already gone"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use thiserror::Error;

/// Error type for HTTP transport operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The requested resource does not exist (HTTP 404).
    #[error("resource at '{path}' was not found")]
    NotFound {
        /// The request path that produced the 404.
        path: String,
    },

    /// The request was rejected (HTTP 403), usually a bad provider key.
    #[error("access to '{path}' is forbidden; check the provider key")]
    Forbidden {
        /// The request path that produced the 403.
        path: String,
    },

    /// The server answered with a status the client does not handle.
    #[error("unhandled response status {code} for '{path}': {body}")]
    UnhandledResponse {
        /// The HTTP status code.
        code: u16,
        /// The request path.
        path: String,
        /// The raw response body.
        body: String,
    },

    /// A network-level error occurred (connection, TLS, timeout).
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded as JSON.
    #[error("failed to decode response body from '{path}': {source}")]
    Decode {
        /// The request path.
        path: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Returns `true` if this error is a 404.
    ///
    /// Useful in teardown flows, where a resource that is already absent is
    /// not an application error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this error is a 403.
    #[must_use]
    pub const fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_includes_path() {
        let error = HttpError::NotFound {
            path: "/admin/api/services/42".to_string(),
        };
        assert!(error.to_string().contains("/admin/api/services/42"));
        assert!(error.is_not_found());
        assert!(!error.is_forbidden());
    }

    #[test]
    fn test_forbidden_message_mentions_provider_key() {
        let error = HttpError::Forbidden {
            path: "/admin/api/services".to_string(),
        };
        assert!(error.to_string().contains("provider key"));
        assert!(error.is_forbidden());
    }

    #[test]
    fn test_unhandled_response_carries_code_and_body() {
        let error = HttpError::UnhandledResponse {
            code: 500,
            path: "/admin/api/accounts".to_string(),
            body: "Internal Server Error".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("Internal Server Error"));
    }

    #[test]
    fn test_all_variants_implement_std_error() {
        let error: &dyn std::error::Error = &HttpError::NotFound {
            path: "/x".to_string(),
        };
        let _ = error;
    }
}
