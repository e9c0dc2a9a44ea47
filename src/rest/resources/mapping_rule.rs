//! The MappingRule resource, nested under a service's proxy.
//!
//! A mapping rule binds an HTTP method + path pattern to a metric. The
//! manager can capture a metric at construction, in which case create and
//! update fill in `metric_id` when the caller omits it.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::{Create, Delete, Fields, List, Manager, Read, Resource, ResourceError, Update};

/// Manager for `/admin/api/services/{service_id}/proxy/mapping_rules`.
pub struct MappingRuleManager {
    pub(crate) client: Arc<HttpClient>,
    service_id: u64,
    metric_id: Option<u64>,
}

impl MappingRuleManager {
    /// Creates a mapping rule manager bound to the given service.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, service_id: u64) -> Self {
        Self {
            client,
            service_id,
            metric_id: None,
        }
    }

    /// Binds a metric whose id is injected into create and update
    /// attributes when they carry none.
    #[must_use]
    pub const fn with_metric(mut self, metric_id: u64) -> Self {
        self.metric_id = Some(metric_id);
        self
    }

    /// Returns the owning service id.
    #[must_use]
    pub const fn service_id(&self) -> u64 {
        self.service_id
    }

    fn inject_metric(&self, attributes: &mut Fields) {
        if let Some(metric_id) = self.metric_id {
            attributes
                .entry("metric_id")
                .or_insert_with(|| Value::from(metric_id));
        }
    }
}

impl Manager for MappingRuleManager {
    const ENTITY_NAME: &'static str = "mapping_rule";
    const COLLECTION_NAME: &'static str = "mapping_rules";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!(
            "{ADMIN_PATH}/services/{}/proxy/mapping_rules",
            self.service_id
        )
    }
}

impl List for MappingRuleManager {}
impl Read for MappingRuleManager {}
impl Delete for MappingRuleManager {}

impl Create for MappingRuleManager {
    async fn create(&self, mut attributes: Fields) -> Result<Resource<'_, Self>, ResourceError> {
        self.inject_metric(&mut attributes);
        tracing::debug!(entity = Self::ENTITY_NAME, "create");
        let body = self
            .client
            .post(&self.base_path(), &Value::Object(attributes), None)
            .await?;
        self.entity_from(body)
    }
}

impl Update for MappingRuleManager {
    async fn update_with_id(
        &self,
        id: u64,
        mut attributes: Fields,
    ) -> Result<Resource<'_, Self>, ResourceError> {
        self.inject_metric(&mut attributes);
        tracing::debug!(entity = Self::ENTITY_NAME, id, "update");
        let path = format!("{}/{id}", self.base_path());
        let body = self
            .client
            .put(&path, Some(&Value::Object(attributes)), None)
            .await?;
        self.entity_from(body)
    }
}

/// A mapping rule entity.
pub type MappingRule<'a> = Resource<'a, MappingRuleManager>;
