//! The ActiveDoc resource (API documentation specs).
//!
//! The admin API has no GET-by-id endpoint for active docs; reads go
//! through the listing.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::{Create, Delete, List, Manager, Resource, ResourceError, Update};

/// Manager for `/admin/api/active_docs`.
pub struct ActiveDocManager {
    pub(crate) client: Arc<HttpClient>,
}

impl ActiveDocManager {
    /// Creates an active docs manager over the given transport.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Looks an active doc up by id through the listing.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn read(&self, id: u64) -> Result<Option<ActiveDoc<'_>>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, id, "read");
        self.find(None, |doc| doc.id() == Some(id)).await
    }
}

impl Manager for ActiveDocManager {
    const ENTITY_NAME: &'static str = "api_doc";
    const COLLECTION_NAME: &'static str = "api_docs";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/active_docs")
    }
}

impl List for ActiveDocManager {}
impl Create for ActiveDocManager {}
impl Update for ActiveDocManager {}
impl Delete for ActiveDocManager {}

/// An active doc entity.
pub type ActiveDoc<'a> = Resource<'a, ActiveDocManager>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::tests::test_client;

    #[test]
    fn test_base_path_and_envelope_keys() {
        let manager = ActiveDocManager::new(test_client());
        assert_eq!(manager.base_path(), "/admin/api/active_docs");
        assert_eq!(ActiveDocManager::ENTITY_NAME, "api_doc");
        assert_eq!(ActiveDocManager::COLLECTION_NAME, "api_docs");
    }
}
