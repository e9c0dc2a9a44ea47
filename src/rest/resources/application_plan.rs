//! The ApplicationPlan resource, nested under a service.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::resources::application_plan_limit::ApplicationPlanLimitManager;
use crate::rest::resources::metric::Metric;
use crate::rest::resources::plan::DefaultPlan;
use crate::rest::{Create, Delete, List, Manager, Read, Resource, ResourceError, Update};

/// Manager for `/admin/api/services/{service_id}/application_plans`.
pub struct ApplicationPlanManager {
    pub(crate) client: Arc<HttpClient>,
    service_id: u64,
}

impl ApplicationPlanManager {
    /// Creates an application plan manager bound to the given service.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, service_id: u64) -> Self {
        Self { client, service_id }
    }

    /// Returns the owning service id.
    #[must_use]
    pub const fn service_id(&self) -> u64 {
        self.service_id
    }

    /// Lists application plans across every service.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn list_all(&self) -> Result<Vec<ApplicationPlan<'_>>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "list all");
        let body = self
            .client
            .get(&format!("{ADMIN_PATH}/application_plans"), None)
            .await?;
        self.collection_from(body)
    }
}

impl Manager for ApplicationPlanManager {
    const ENTITY_NAME: &'static str = "application_plan";
    const COLLECTION_NAME: &'static str = "plans";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!(
            "{ADMIN_PATH}/services/{}/application_plans",
            self.service_id
        )
    }
}

impl List for ApplicationPlanManager {}
impl Read for ApplicationPlanManager {}
impl Create for ApplicationPlanManager {}
impl Update for ApplicationPlanManager {}
impl Delete for ApplicationPlanManager {}
impl DefaultPlan for ApplicationPlanManager {}

/// An application plan entity.
pub type ApplicationPlan<'a> = Resource<'a, ApplicationPlanManager>;

impl ApplicationPlan<'_> {
    /// Returns the limits manager for this plan and the given metric.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the plan or the metric has
    /// no id.
    pub fn limits(
        &self,
        metric: &Metric<'_>,
    ) -> Result<ApplicationPlanLimitManager, ResourceError> {
        let plan_id = self.require_id("limits")?;
        let metric_id = metric.require_id("limits")?;
        Ok(ApplicationPlanLimitManager::new(
            Arc::clone(&self.manager().client),
            plan_id,
            metric_id,
        ))
    }
}
