//! The Settings resource, a per-account singleton.
//!
//! Settings are one record per provider account, addressed without an id,
//! and the response body is the bare settings mapping with no entity
//! wrapper; the whole-mapping fallback of the extraction rule handles it.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::{Fields, Manager, Resource, ResourceError};

/// Manager for `/admin/api/settings`.
///
/// # Example
///
/// ```rust,ignore
/// let settings_manager = client.settings();
/// let mut settings = settings_manager.read().await?;
///
/// settings.set("strong_passwords_enabled", true.into());
/// settings.save().await?;
/// ```
pub struct SettingsManager {
    pub(crate) client: Arc<HttpClient>,
}

impl SettingsManager {
    /// Creates a settings manager over the given transport.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Reads the account settings.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn read(&self) -> Result<Settings<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "read");
        let body = self.client.get(&self.base_path(), None).await?;
        self.entity_from(body)
    }

    /// Updates the account settings.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn update(&self, attributes: Fields) -> Result<Settings<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "update");
        let body = self
            .client
            .put(&self.base_path(), Some(&Value::Object(attributes)), None)
            .await?;
        self.entity_from(body)
    }
}

impl Manager for SettingsManager {
    const ENTITY_NAME: &'static str = "settings";
    const COLLECTION_NAME: &'static str = "settings";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/settings")
    }
}

/// The settings entity.
pub type Settings<'a> = Resource<'a, SettingsManager>;

impl Settings<'_> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::tests::test_client;

    #[test]
    fn test_base_path_has_no_trailing_id() {
        let manager = SettingsManager::new(test_client());
        assert_eq!(manager.base_path(), "/admin/api/settings");
    }
}
