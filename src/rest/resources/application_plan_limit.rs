//! The ApplicationPlanLimit resource: usage limits on a metric within an
//! application plan.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::{Create, Delete, List, Manager, Read, Resource, Update};

/// Manager for `/admin/api/application_plans/{plan_id}/metrics/{metric_id}/limits`.
pub struct ApplicationPlanLimitManager {
    pub(crate) client: Arc<HttpClient>,
    plan_id: u64,
    metric_id: u64,
}

impl ApplicationPlanLimitManager {
    /// Creates a limits manager bound to the given plan and metric.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, plan_id: u64, metric_id: u64) -> Self {
        Self {
            client,
            plan_id,
            metric_id,
        }
    }

    /// Returns the owning plan id.
    #[must_use]
    pub const fn plan_id(&self) -> u64 {
        self.plan_id
    }

    /// Returns the owning metric id.
    #[must_use]
    pub const fn metric_id(&self) -> u64 {
        self.metric_id
    }
}

impl Manager for ApplicationPlanLimitManager {
    const ENTITY_NAME: &'static str = "limit";
    const COLLECTION_NAME: &'static str = "limits";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!(
            "{ADMIN_PATH}/application_plans/{}/metrics/{}/limits",
            self.plan_id, self.metric_id
        )
    }
}

impl List for ApplicationPlanLimitManager {}
impl Read for ApplicationPlanLimitManager {}
impl Create for ApplicationPlanLimitManager {}
impl Update for ApplicationPlanLimitManager {}
impl Delete for ApplicationPlanLimitManager {}

/// An application plan limit entity.
pub type ApplicationPlanLimit<'a> = Resource<'a, ApplicationPlanLimitManager>;
