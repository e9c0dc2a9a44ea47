//! The ApplicationKey resource, nested under an account's application.
//!
//! Keys are addressed by their `value` string, not a numeric id, and the
//! create endpoint answers with the owning application rather than the key.
//! The manager therefore implements its own create/read/delete on top of
//! the generic listing.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::{Fields, List, Manager, Resource, ResourceError};

/// Manager for `/admin/api/accounts/{account_id}/applications/{application_id}/keys`.
pub struct ApplicationKeyManager {
    pub(crate) client: Arc<HttpClient>,
    account_id: u64,
    application_id: u64,
}

impl ApplicationKeyManager {
    /// Creates a key manager bound to the given account and application.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, account_id: u64, application_id: u64) -> Self {
        Self {
            client,
            account_id,
            application_id,
        }
    }

    /// Creates an application key.
    ///
    /// The endpoint answers with the owning application, so the fresh key is
    /// located by re-listing and matching on `value`; `None` means the
    /// server did not record it.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn create(&self, key: &str) -> Result<Option<ApplicationKey<'_>>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "create");
        let mut attributes = Fields::new();
        attributes.insert("key".to_string(), Value::from(key));
        self.client
            .post(&self.base_path(), &Value::Object(attributes), None)
            .await?;
        self.read(key).await
    }

    /// Looks a key up by its value.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn read(&self, key: &str) -> Result<Option<ApplicationKey<'_>>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "read");
        self.find(None, |resource| {
            resource.get("value").and_then(Value::as_str) == Some(key)
        })
        .await
    }

    /// Deletes a key by its value.
    ///
    /// # Errors
    ///
    /// Returns transport errors; a key the server does not know surfaces as
    /// the wrapped 404.
    pub async fn delete(&self, key: &str) -> Result<bool, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "delete");
        self.client
            .delete(&format!("{}/{key}", self.base_path()), None)
            .await?;
        Ok(true)
    }
}

impl Manager for ApplicationKeyManager {
    const ENTITY_NAME: &'static str = "key";
    const COLLECTION_NAME: &'static str = "keys";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!(
            "{ADMIN_PATH}/accounts/{}/applications/{}/keys",
            self.account_id, self.application_id
        )
    }
}

impl List for ApplicationKeyManager {}

/// An application key entity.
pub type ApplicationKey<'a> = Resource<'a, ApplicationKeyManager>;

impl ApplicationKey<'_> {
    /// Revokes (deletes) the remote key and clears the local mapping.
    ///
    /// Returns `false` without issuing a request when the entity carries no
    /// `value`.
    ///
    /// # Errors
    ///
    /// Returns transport errors.
    pub async fn revoke(&mut self) -> Result<bool, ResourceError> {
        let Some(value) = self.get("value").and_then(Value::as_str).map(str::to_owned) else {
            return Ok(false);
        };
        let deleted = self.manager().delete(&value).await?;
        if deleted {
            self.replace_fields(None);
        }
        Ok(deleted)
    }
}
