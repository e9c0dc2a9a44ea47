//! The Metric resource, nested under a service.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::resources::application_plan::ApplicationPlan;
use crate::rest::resources::application_plan_limit::ApplicationPlanLimitManager;
use crate::rest::resources::method::MethodManager;
use crate::rest::{Create, Delete, List, Manager, Read, Resource, ResourceError, Update};

/// Manager for `/admin/api/services/{service_id}/metrics`.
pub struct MetricManager {
    pub(crate) client: Arc<HttpClient>,
    service_id: u64,
}

impl MetricManager {
    /// Creates a metric manager bound to the given service.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, service_id: u64) -> Self {
        Self { client, service_id }
    }

    /// Returns the owning service id.
    #[must_use]
    pub const fn service_id(&self) -> u64 {
        self.service_id
    }
}

impl Manager for MetricManager {
    const ENTITY_NAME: &'static str = "metric";
    const COLLECTION_NAME: &'static str = "metrics";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/services/{}/metrics", self.service_id)
    }
}

impl List for MetricManager {}
impl Read for MetricManager {}
impl Create for MetricManager {}
impl Update for MetricManager {}
impl Delete for MetricManager {}

/// A metric entity.
pub type Metric<'a> = Resource<'a, MetricManager>;

impl Metric<'_> {
    /// Returns the methods manager bound to this metric.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the metric has no id.
    pub fn methods(&self) -> Result<MethodManager, ResourceError> {
        let id = self.require_id("methods")?;
        Ok(MethodManager::new(
            Arc::clone(&self.manager().client),
            self.manager().service_id(),
            id,
        ))
    }

    /// Returns the limits manager for this metric under the given
    /// application plan.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the metric or the plan has
    /// no id.
    pub fn limits(
        &self,
        plan: &ApplicationPlan<'_>,
    ) -> Result<ApplicationPlanLimitManager, ResourceError> {
        let metric_id = self.require_id("limits")?;
        let plan_id = plan.require_id("limits")?;
        Ok(ApplicationPlanLimitManager::new(
            Arc::clone(&self.manager().client),
            plan_id,
            metric_id,
        ))
    }
}
