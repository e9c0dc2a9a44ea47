//! The Proxy resource, a singleton under each service.
//!
//! There is exactly one proxy per service, addressed without an id, so the
//! manager exposes its own singleton `read`/`update` instead of the generic
//! id-based capabilities. Proxy configurations are versioned per
//! environment and can be promoted between environments.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::{Fields, Manager, Resource, ResourceError};

/// Manager for `/admin/api/services/{service_id}/proxy`.
///
/// # Example
///
/// ```rust,ignore
/// let proxy_manager = service.proxy()?;
/// let mut proxy = proxy_manager.read().await?;
///
/// proxy.set("endpoint", "https://gateway.example.com:443".into());
/// proxy.save().await?;
///
/// proxy_manager.promote(1, "sandbox", "production").await?;
/// ```
pub struct ProxyManager {
    pub(crate) client: Arc<HttpClient>,
    service_id: u64,
}

impl ProxyManager {
    /// Creates a proxy manager bound to the given service.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, service_id: u64) -> Self {
        Self { client, service_id }
    }

    /// Returns the owning service id.
    #[must_use]
    pub const fn service_id(&self) -> u64 {
        self.service_id
    }

    /// Reads the service's proxy settings.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn read(&self) -> Result<Proxy<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "read");
        let body = self.client.get(&self.base_path(), None).await?;
        self.entity_from(body)
    }

    /// Updates the service's proxy settings.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn update(&self, attributes: Fields) -> Result<Proxy<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "update");
        let body = self
            .client
            .put(&self.base_path(), Some(&Value::Object(attributes)), None)
            .await?;
        self.entity_from(body)
    }

    /// Promotes a proxy configuration from one environment to another
    /// (typically `sandbox` to `production`).
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn promote(
        &self,
        config_id: u64,
        from: &str,
        to: &str,
    ) -> Result<Proxy<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, config_id, from, to, "promote");
        let path = format!("{}/configs/{from}/{config_id}/promote", self.base_path());
        let params = vec![("to".to_string(), to.to_string())];
        let body = self
            .client
            .post(&path, &Value::Object(Fields::new()), Some(&params))
            .await?;
        self.entity_from(body)
    }

    /// Lists the proxy configurations of an environment.
    ///
    /// The answer is the raw configuration envelope; field access goes
    /// through the resource mapping.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn config_list(&self, env: &str) -> Result<Proxy<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, env, "config list");
        let path = format!("{}/configs/{env}", self.base_path());
        let body = self.client.get(&path, None).await?;
        self.entity_from(body)
    }

    /// Reads one proxy configuration of an environment by version id.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn config_read(&self, id: u64, env: &str) -> Result<Proxy<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, id, env, "config read");
        let path = format!("{}/configs/{env}/{id}", self.base_path());
        let body = self.client.get(&path, None).await?;
        self.entity_from(body)
    }

    /// Reads the latest proxy configuration of an environment.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn latest(&self, env: &str) -> Result<Proxy<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, env, "latest config");
        let path = format!("{}/configs/{env}/latest", self.base_path());
        let body = self.client.get(&path, None).await?;
        self.entity_from(body)
    }
}

impl Manager for ProxyManager {
    const ENTITY_NAME: &'static str = "proxy";
    const COLLECTION_NAME: &'static str = "proxies";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/services/{}/proxy", self.service_id)
    }
}

/// A proxy entity.
pub type Proxy<'a> = Resource<'a, ProxyManager>;

impl Proxy<'_> {
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
