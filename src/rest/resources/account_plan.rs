//! The AccountPlan resource.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::resources::plan::DefaultPlan;
use crate::rest::{Create, Delete, List, Manager, Read, Resource, Update};

/// Manager for `/admin/api/account_plans`.
///
/// # Example
///
/// ```rust,ignore
/// use threescale_api::rest::resources::DefaultPlan;
///
/// let plans = client.account_plans();
/// let plan = plans.read_by_name("Default").await?;
/// if let Some(plan) = plan {
///     plan.set_default().await?;
/// }
/// ```
pub struct AccountPlanManager {
    pub(crate) client: Arc<HttpClient>,
}

impl AccountPlanManager {
    /// Creates an account plan manager over the given transport.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

impl Manager for AccountPlanManager {
    const ENTITY_NAME: &'static str = "account_plan";
    const COLLECTION_NAME: &'static str = "plans";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/account_plans")
    }
}

impl List for AccountPlanManager {}
impl Read for AccountPlanManager {}
impl Create for AccountPlanManager {}
impl Update for AccountPlanManager {}
impl Delete for AccountPlanManager {}
impl DefaultPlan for AccountPlanManager {}

/// An account plan entity.
pub type AccountPlan<'a> = Resource<'a, AccountPlanManager>;
