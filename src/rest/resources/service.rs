//! The Service resource.
//!
//! Services are the top of the configuration hierarchy: metrics, methods,
//! plans, proxy settings, and mapping rules all hang off a service.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::resources::application_plan::ApplicationPlanManager;
use crate::rest::resources::mapping_rule::MappingRuleManager;
use crate::rest::resources::metric::MetricManager;
use crate::rest::resources::proxy::ProxyManager;
use crate::rest::resources::service_plan::ServicePlanManager;
use crate::rest::{Create, Delete, List, Manager, Read, Resource, ResourceError, Update};

/// Manager for `/admin/api/services`.
///
/// # Example
///
/// ```rust,ignore
/// use threescale_api::rest::{Create, List};
///
/// let services = client.services();
/// let service = services.read_by_name("backend").await?;
/// ```
pub struct ServiceManager {
    pub(crate) client: Arc<HttpClient>,
}

impl ServiceManager {
    /// Creates a service manager over the given transport.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

impl Manager for ServiceManager {
    const ENTITY_NAME: &'static str = "service";
    const COLLECTION_NAME: &'static str = "services";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/services")
    }
}

impl List for ServiceManager {}
impl Read for ServiceManager {}
impl Create for ServiceManager {}
impl Update for ServiceManager {}
impl Delete for ServiceManager {}

/// A service entity.
pub type Service<'a> = Resource<'a, ServiceManager>;

impl Service<'_> {
    /// Returns the proxy manager bound to this service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the service has no id.
    pub fn proxy(&self) -> Result<ProxyManager, ResourceError> {
        let id = self.require_id("proxy")?;
        Ok(ProxyManager::new(Arc::clone(&self.manager().client), id))
    }

    /// Returns the metrics manager bound to this service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the service has no id.
    pub fn metrics(&self) -> Result<MetricManager, ResourceError> {
        let id = self.require_id("metrics")?;
        Ok(MetricManager::new(Arc::clone(&self.manager().client), id))
    }

    /// Returns the service plans manager bound to this service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the service has no id.
    pub fn service_plans(&self) -> Result<ServicePlanManager, ResourceError> {
        let id = self.require_id("service_plans")?;
        Ok(ServicePlanManager::new(Arc::clone(&self.manager().client), id))
    }

    /// Returns the application plans manager bound to this service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the service has no id.
    pub fn application_plans(&self) -> Result<ApplicationPlanManager, ResourceError> {
        let id = self.require_id("application_plans")?;
        Ok(ApplicationPlanManager::new(
            Arc::clone(&self.manager().client),
            id,
        ))
    }

    /// Returns the mapping rules manager bound to this service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the service has no id.
    pub fn mapping_rules(&self) -> Result<MappingRuleManager, ResourceError> {
        let id = self.require_id("mapping_rules")?;
        Ok(MappingRuleManager::new(Arc::clone(&self.manager().client), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::tests::test_client;
    use crate::rest::Fields;
    use serde_json::json;

    #[test]
    fn test_base_path() {
        let manager = ServiceManager::new(test_client());
        assert_eq!(manager.base_path(), "/admin/api/services");
    }

    #[test]
    fn test_envelope_keys() {
        assert_eq!(ServiceManager::ENTITY_NAME, "service");
        assert_eq!(ServiceManager::COLLECTION_NAME, "services");
    }

    #[test]
    fn test_sub_managers_require_persisted_service() {
        let manager = ServiceManager::new(test_client());
        let service = Resource::new(&manager, Some(Fields::new()));
        assert!(service.metrics().is_err());
        assert!(service.proxy().is_err());

        let persisted = manager
            .entity_from(json!({"service": {"id": 99}}))
            .unwrap();
        assert!(persisted.metrics().is_ok());
        assert!(persisted.proxy().is_ok());
        assert!(persisted.service_plans().is_ok());
        assert!(persisted.application_plans().is_ok());
        assert!(persisted.mapping_rules().is_ok());
    }
}
