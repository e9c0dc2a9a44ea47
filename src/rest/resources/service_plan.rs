//! The ServicePlan resource, nested under a service.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::resources::plan::DefaultPlan;
use crate::rest::{Create, Delete, List, Manager, Read, Resource, ResourceError, Update};

/// Manager for `/admin/api/services/{service_id}/service_plans`.
pub struct ServicePlanManager {
    pub(crate) client: Arc<HttpClient>,
    service_id: u64,
}

impl ServicePlanManager {
    /// Creates a service plan manager bound to the given service.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, service_id: u64) -> Self {
        Self { client, service_id }
    }

    /// Returns the owning service id.
    #[must_use]
    pub const fn service_id(&self) -> u64 {
        self.service_id
    }

    /// Lists service plans across every service.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn list_all(&self) -> Result<Vec<ServicePlan<'_>>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "list all");
        let body = self
            .client
            .get(&format!("{ADMIN_PATH}/service_plans"), None)
            .await?;
        self.collection_from(body)
    }
}

impl Manager for ServicePlanManager {
    const ENTITY_NAME: &'static str = "service_plan";
    const COLLECTION_NAME: &'static str = "plans";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/services/{}/service_plans", self.service_id)
    }
}

impl List for ServicePlanManager {}
impl Read for ServicePlanManager {}
impl Create for ServicePlanManager {}
impl Update for ServicePlanManager {}
impl Delete for ServicePlanManager {}
impl DefaultPlan for ServicePlanManager {}

/// A service plan entity.
pub type ServicePlan<'a> = Resource<'a, ServicePlanManager>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::tests::test_client;

    #[test]
    fn test_base_path_includes_service_id() {
        let manager = ServicePlanManager::new(test_client(), 7);
        assert_eq!(manager.base_path(), "/admin/api/services/7/service_plans");
    }
}
