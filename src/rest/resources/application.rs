//! The Application resource, nested under an account.

use std::sync::Arc;

use crate::clients::{HttpClient, Params};
use crate::rest::manager::ADMIN_PATH;
use crate::rest::resources::application_key::ApplicationKeyManager;
use crate::rest::{Create, Delete, List, Manager, Read, Resource, ResourceError, Update};

/// Manager for `/admin/api/accounts/{account_id}/applications`.
///
/// Besides the per-account CRUD endpoints, the admin API exposes two
/// account-independent lookups: a flat listing across all accounts and a
/// find endpoint keyed by application id, user key, or app id.
pub struct ApplicationManager {
    pub(crate) client: Arc<HttpClient>,
    account_id: u64,
}

impl ApplicationManager {
    /// Creates an application manager bound to the given account.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, account_id: u64) -> Self {
        Self { client, account_id }
    }

    /// Returns the owning account id.
    #[must_use]
    pub const fn account_id(&self) -> u64 {
        self.account_id
    }

    /// Lists applications across every account, optionally limited to one
    /// service.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn list_all(
        &self,
        service_id: Option<u64>,
    ) -> Result<Vec<Application<'_>>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "list all");
        let params = service_id.map(|id| vec![("service_id".to_string(), id.to_string())]);
        let body = self
            .client
            .get(&format!("{ADMIN_PATH}/applications"), params.as_ref())
            .await?;
        self.collection_from(body)
    }

    /// Looks an application up across every account.
    ///
    /// Recognized parameters: `application_id`, `user_key`, `app_id`,
    /// `service_id`.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors; an unknown key
    /// surfaces as the wrapped 404.
    pub async fn find_by(&self, params: Params) -> Result<Application<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "find by");
        let body = self
            .client
            .get(&format!("{ADMIN_PATH}/applications/find"), Some(&params))
            .await?;
        self.entity_from(body)
    }

    /// Puts the application into the given state (`accept`, `suspend`,
    /// `resume`).
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn set_state(&self, id: u64, state: &str) -> Result<Application<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, id, state, "set state");
        let path = format!("{}/{id}/{state}", self.base_path());
        let body = self.client.put(&path, None, None).await?;
        self.entity_from(body)
    }

    /// Accepts the application.
    ///
    /// # Errors
    ///
    /// See [`ApplicationManager::set_state`].
    pub async fn accept(&self, id: u64) -> Result<Application<'_>, ResourceError> {
        self.set_state(id, "accept").await
    }

    /// Suspends the application.
    ///
    /// # Errors
    ///
    /// See [`ApplicationManager::set_state`].
    pub async fn suspend(&self, id: u64) -> Result<Application<'_>, ResourceError> {
        self.set_state(id, "suspend").await
    }

    /// Resumes a suspended application.
    ///
    /// # Errors
    ///
    /// See [`ApplicationManager::set_state`].
    pub async fn resume(&self, id: u64) -> Result<Application<'_>, ResourceError> {
        self.set_state(id, "resume").await
    }
}

impl Manager for ApplicationManager {
    const ENTITY_NAME: &'static str = "application";
    const COLLECTION_NAME: &'static str = "applications";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/accounts/{}/applications", self.account_id)
    }
}

impl List for ApplicationManager {}
impl Read for ApplicationManager {}
impl Create for ApplicationManager {}
impl Update for ApplicationManager {}
impl Delete for ApplicationManager {}

/// An application entity.
pub type Application<'a> = Resource<'a, ApplicationManager>;

impl<'a> Application<'a> {
    /// Returns the keys manager bound to this application.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the application has no id.
    pub fn keys(&self) -> Result<ApplicationKeyManager, ResourceError> {
        let id = self.require_id("keys")?;
        Ok(ApplicationKeyManager::new(
            Arc::clone(&self.manager().client),
            self.manager().account_id(),
            id,
        ))
    }

    /// Puts this application into the given state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the application has no id,
    /// plus transport errors.
    pub async fn set_state(&self, state: &str) -> Result<Application<'a>, ResourceError> {
        let id = self.require_id("set_state")?;
        self.manager().set_state(id, state).await
    }

    /// Accepts this application.
    ///
    /// # Errors
    ///
    /// See [`Application::set_state`].
    pub async fn accept(&self) -> Result<Application<'a>, ResourceError> {
        self.set_state("accept").await
    }

    /// Suspends this application.
    ///
    /// # Errors
    ///
    /// See [`Application::set_state`].
    pub async fn suspend(&self) -> Result<Application<'a>, ResourceError> {
        self.set_state("suspend").await
    }

    /// Resumes this application.
    ///
    /// # Errors
    ///
    /// See [`Application::set_state`].
    pub async fn resume(&self) -> Result<Application<'a>, ResourceError> {
        self.set_state("resume").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::tests::test_client;
    use serde_json::json;

    #[test]
    fn test_base_path_includes_account_id() {
        let manager = ApplicationManager::new(test_client(), 12);
        assert_eq!(manager.base_path(), "/admin/api/accounts/12/applications");
    }

    #[test]
    fn test_keys_manager_composes_both_parent_ids() {
        let manager = ApplicationManager::new(test_client(), 12);
        let application = manager
            .entity_from(json!({"application": {"id": 34}}))
            .unwrap();
        let keys = application.keys().unwrap();
        assert_eq!(
            keys.base_path(),
            "/admin/api/accounts/12/applications/34/keys"
        );
    }
}
