//! The generic resource entity wrapper.
//!
//! A [`Resource`] bundles a decoded entity mapping with a reference to the
//! manager that produced it, so an entity can save, delete, and refresh
//! itself by delegating back to the manager.
//!
//! # Capability checks
//!
//! Delegated operations are gated by the manager's capability traits rather
//! than probed at runtime: `update()` exists only when the manager
//! implements [`Update`], `delete()` only with [`Delete`], `reload()` only
//! with [`Read`]. A resource family that does not support an operation
//! simply has no such method.
//!
//! # Staleness
//!
//! After a successful `delete()` the local mapping is cleared; field reads
//! yield `None`, writes are no-ops, and delegated operations return without
//! issuing further requests.

use std::fmt;

use serde_json::Value;

use crate::rest::errors::ResourceError;
use crate::rest::manager::{Delete, Manager, Read, Update};

/// The backing mapping of an entity: string keys to JSON-typed values.
///
/// Remote records have no fixed schema; fields are accessed by key and
/// mutations stay local until an explicit update pushes them to the server.
pub type Fields = serde_json::Map<String, Value>;

/// A handle to one remote record, tied to the manager that produced it.
///
/// The manager is shared by all resources it produces; the resource holds a
/// lookup reference, not ownership.
///
/// # Example
///
/// ```rust,ignore
/// let manager = client.services();
/// let mut service = manager.read(42).await?;
///
/// assert_eq!(service.get("name").and_then(|v| v.as_str()), Some("api"));
///
/// service.set("name", "backend".into());
/// service.update().await?;       // PUT, refreshes the local mapping
/// service.delete().await?;       // DELETE, clears the local mapping
/// ```
pub struct Resource<'a, M> {
    manager: &'a M,
    fields: Option<Fields>,
}

impl<'a, M: Manager> Resource<'a, M> {
    /// Creates a resource over a decoded entity mapping.
    ///
    /// `None` fields represent an absent entity (e.g., a blank response
    /// body, or a record deleted through this handle).
    #[must_use]
    pub const fn new(manager: &'a M, fields: Option<Fields>) -> Self {
        Self { manager, fields }
    }

    /// Returns the manager that produced this resource.
    #[must_use]
    pub const fn manager(&self) -> &'a M {
        self.manager
    }

    /// Returns the value of a field, or `None` if the field or the whole
    /// entity is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.as_ref()?.get(key)
    }

    /// Sets a field locally. No-op when the entity is absent; nothing is
    /// sent to the server until an explicit update pushes it.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        if let Some(fields) = self.fields.as_mut() {
            fields.insert(key.into(), value);
        }
    }

    /// Returns the entity's id, if persisted.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.get("id").and_then(Value::as_u64)
    }

    /// Returns `true` if the entity carries the given field.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.as_ref().is_some_and(|fields| fields.contains_key(key))
    }

    /// Returns the backing mapping, or `None` for an absent entity.
    #[must_use]
    pub const fn fields(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }

    /// Consumes the resource and returns the backing mapping.
    #[must_use]
    pub fn into_fields(self) -> Option<Fields> {
        self.fields
    }

    pub(crate) fn replace_fields(&mut self, fields: Option<Fields>) {
        self.fields = fields;
    }

    pub(crate) fn require_id(&self, operation: &'static str) -> Result<u64, ResourceError> {
        self.id().ok_or(ResourceError::MissingId { operation })
    }
}

impl<M: Update> Resource<'_, M> {
    /// Pushes the local mapping to the server and refreshes it from the
    /// response.
    ///
    /// No-op when the entity is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the entity carries no `id`,
    /// or any transport error from the underlying request.
    pub async fn update(&mut self) -> Result<(), ResourceError> {
        let Some(fields) = self.fields.clone() else {
            return Ok(());
        };
        let refreshed = self.manager.update(fields).await?;
        self.fields = refreshed.into_fields();
        Ok(())
    }
}

impl<M: Delete> Resource<'_, M> {
    /// Deletes the remote record and clears the local mapping.
    ///
    /// Returns `false` without issuing a request when the entity has no id.
    ///
    /// # Errors
    ///
    /// Returns any transport error from the underlying request.
    pub async fn delete(&mut self) -> Result<bool, ResourceError> {
        let Some(id) = self.id() else {
            return Ok(false);
        };
        let deleted = self.manager.delete(id).await?;
        if deleted {
            self.fields = None;
        }
        Ok(deleted)
    }
}

impl<M: Read> Resource<'_, M> {
    /// Re-fetches the record and replaces the local mapping with the fresh
    /// one.
    ///
    /// No-op when the entity is absent.
    ///
    /// # Errors
    ///
    /// Returns any transport error from the underlying request.
    pub async fn reload(&mut self) -> Result<(), ResourceError> {
        let Some(id) = self.id() else {
            return Ok(());
        };
        let fresh = self.manager.read(id).await?;
        self.fields = fresh.into_fields();
        Ok(())
    }
}

impl<M: Manager> fmt::Debug for Resource<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("entity", &M::ENTITY_NAME)
            .field("fields", &self.fields)
            .finish()
    }
}
