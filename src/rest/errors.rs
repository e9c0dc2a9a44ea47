//! Error types for resource operations.
//!
//! This module extends the transport-level [`HttpError`] with resource-layer
//! semantics: precondition failures (an entity without an `id`) and
//! unexpected response envelopes.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource manager and entity operations.
///
/// # Example
///
/// ```rust,ignore
/// match manager.read(service_id).await {
///     Ok(service) => println!("{:?}", service.get("name")),
///     Err(e) if e.is_not_found() => println!("gone"),
///     Err(e) => return Err(e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An id-dependent operation was invoked on an entity without an `id`.
    ///
    /// Entities only carry an `id` once persisted; operating on an
    /// unpersisted or stale entity fails before any request is issued.
    #[error("entity has no id; '{operation}' requires a persisted entity")]
    MissingId {
        /// The operation that required an id.
        operation: &'static str,
    },

    /// The response body did not match any of the envelope shapes the
    /// extraction rule understands.
    #[error("unexpected response shape: {detail}")]
    UnexpectedShape {
        /// What was found instead.
        detail: String,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns `true` if this error wraps a 404.
    ///
    /// Callers typically tolerate this around cleanup paths, where a
    /// resource that is already absent is not an application error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_not_found())
    }

    /// Returns `true` if this error wraps a 403.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_forbidden())
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
