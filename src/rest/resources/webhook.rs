//! The WebHook resource, a per-account singleton.
//!
//! Webhook settings are one record per provider account, addressed without
//! an id.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::{Fields, Manager, Resource, ResourceError};

/// Manager for `/admin/api/webhooks`.
pub struct WebHookManager {
    pub(crate) client: Arc<HttpClient>,
}

impl WebHookManager {
    /// Creates a webhook manager over the given transport.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Reads the webhook settings.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn read(&self) -> Result<WebHook<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "read");
        let body = self.client.get(&self.base_path(), None).await?;
        self.entity_from(body)
    }

    /// Updates the webhook settings (`url`, `active`, and the
    /// `*_created_on`/`*_updated_on`/`*_deleted_on` event toggles).
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn update(&self, attributes: Fields) -> Result<WebHook<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "update");
        let body = self
            .client
            .put(&self.base_path(), Some(&Value::Object(attributes)), None)
            .await?;
        self.entity_from(body)
    }
}

impl Manager for WebHookManager {
    const ENTITY_NAME: &'static str = "webhook";
    const COLLECTION_NAME: &'static str = "webhooks";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/webhooks")
    }
}

/// The webhook settings entity.
pub type WebHook<'a> = Resource<'a, WebHookManager>;

impl WebHook<'_> {
    /// Pushes the local mapping to the server (a PUT on the singleton
    /// path) and refreshes it from the response.
    ///
    /// No-op when the entity is absent.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn save(&mut self) -> Result<(), ResourceError> {
        let Some(fields) = self.fields().cloned() else {
            return Ok(());
        };
        let refreshed = self.manager().update(fields).await?;
        self.replace_fields(refreshed.into_fields());
        Ok(())
    }
}
