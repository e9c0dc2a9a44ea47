//! The Method resource, nested under a service's metric.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::{Create, Delete, List, Manager, Read, Resource, Update};

/// Manager for `/admin/api/services/{service_id}/metrics/{metric_id}/methods`.
pub struct MethodManager {
    pub(crate) client: Arc<HttpClient>,
    service_id: u64,
    metric_id: u64,
}

impl MethodManager {
    /// Creates a method manager bound to the given service and metric.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, service_id: u64, metric_id: u64) -> Self {
        Self {
            client,
            service_id,
            metric_id,
        }
    }

    /// Returns the owning service id.
    #[must_use]
    pub const fn service_id(&self) -> u64 {
        self.service_id
    }

    /// Returns the owning metric id.
    #[must_use]
    pub const fn metric_id(&self) -> u64 {
        self.metric_id
    }
}

impl Manager for MethodManager {
    const ENTITY_NAME: &'static str = "method";
    const COLLECTION_NAME: &'static str = "methods";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!(
            "{ADMIN_PATH}/services/{}/metrics/{}/methods",
            self.service_id, self.metric_id
        )
    }
}

impl List for MethodManager {}
impl Read for MethodManager {}
impl Create for MethodManager {}
impl Update for MethodManager {}
impl Delete for MethodManager {}

/// A method entity.
pub type Method<'a> = Resource<'a, MethodManager>;
