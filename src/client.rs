//! The root client bundling the transport and the top-level managers.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::ThreeScaleConfig;
use crate::rest::resources::{
    AccountManager, AccountPlanManager, ActiveDocManager, ProviderManager, ServiceManager,
    SettingsManager, WebHookManager,
};

/// A client for one 3scale admin portal.
///
/// The client owns the shared transport; every accessor hands out a manager
/// over it. Managers for nested resources (metrics, applications, keys, …)
/// are reached through their parent entities.
///
/// # Example
///
/// ```rust,ignore
/// use threescale_api::{AdminEndpoint, Client, ProviderKey, ThreeScaleConfig};
/// use threescale_api::rest::List;
///
/// let config = ThreeScaleConfig::builder()
///     .endpoint(AdminEndpoint::new("https://acme-admin.3scale.net")?)
///     .provider_key(ProviderKey::new(std::env::var("PROVIDER_KEY")?)?)
///     .build()?;
///
/// let client = Client::new(&config);
///
/// let services = client.services();
/// for service in services.list(None).await? {
///     println!("{:?}", service.get("system_name"));
/// }
/// ```
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created (see
    /// [`HttpClient::new`]).
    #[must_use]
    pub fn new(config: &ThreeScaleConfig) -> Self {
        Self {
            http: Arc::new(HttpClient::new(config)),
        }
    }

    /// Returns the shared transport.
    ///
    /// Useful for constructing nested managers directly when the parent
    /// entity ids are already known.
    #[must_use]
    pub fn http_client(&self) -> Arc<HttpClient> {
        Arc::clone(&self.http)
    }

    /// Returns the services manager.
    #[must_use]
    pub fn services(&self) -> ServiceManager {
        ServiceManager::new(Arc::clone(&self.http))
    }

    /// Returns the accounts manager.
    #[must_use]
    pub fn accounts(&self) -> AccountManager {
        AccountManager::new(Arc::clone(&self.http))
    }

    /// Returns the account plans manager.
    #[must_use]
    pub fn account_plans(&self) -> AccountPlanManager {
        AccountPlanManager::new(Arc::clone(&self.http))
    }

    /// Returns the provider users manager.
    #[must_use]
    pub fn providers(&self) -> ProviderManager {
        ProviderManager::new(Arc::clone(&self.http))
    }

    /// Returns the active docs manager.
    #[must_use]
    pub fn active_docs(&self) -> ActiveDocManager {
        ActiveDocManager::new(Arc::clone(&self.http))
    }

    /// Returns the webhooks manager.
    #[must_use]
    pub fn webhooks(&self) -> WebHookManager {
        WebHookManager::new(Arc::clone(&self.http))
    }

    /// Returns the settings manager.
    #[must_use]
    pub fn settings(&self) -> SettingsManager {
        SettingsManager::new(Arc::clone(&self.http))
    }
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdminEndpoint, ProviderKey};
    use crate::rest::Manager;

    fn test_config() -> ThreeScaleConfig {
        ThreeScaleConfig::builder()
            .endpoint(AdminEndpoint::new("https://example-admin.3scale.net").unwrap())
            .provider_key(ProviderKey::new("key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_accessors_share_one_transport() {
        let client = Client::new(&test_config());
        let services = client.services();
        let accounts = client.accounts();
        assert!(std::ptr::eq(services.client(), accounts.client()));
    }

    #[test]
    fn test_all_top_level_managers_are_reachable() {
        let client = Client::new(&test_config());
        assert_eq!(client.services().base_path(), "/admin/api/services");
        assert_eq!(client.accounts().base_path(), "/admin/api/accounts");
        assert_eq!(client.account_plans().base_path(), "/admin/api/account_plans");
        assert_eq!(client.providers().base_path(), "/admin/api/users");
        assert_eq!(client.active_docs().base_path(), "/admin/api/active_docs");
        assert_eq!(client.webhooks().base_path(), "/admin/api/webhooks");
        assert_eq!(client.settings().base_path(), "/admin/api/settings");
    }
}
