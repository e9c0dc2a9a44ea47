//! The Provider resource (provider-side admin portal users).

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::{Create, Delete, List, Manager, Read, Resource, ResourceError, Update};

/// Manager for `/admin/api/users`.
///
/// States (`activate`, `suspend`, `unsuspend`) and roles (`admin`, `member`)
/// are both driven through the same state endpoint; the remote service
/// decides which transitions are legal.
pub struct ProviderManager {
    pub(crate) client: Arc<HttpClient>,
}

impl ProviderManager {
    /// Creates a provider manager over the given transport.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Puts the provider user into the given state or role.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn set_state(&self, id: u64, state: &str) -> Result<Provider<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, id, state, "set state");
        let path = format!("{}/{id}/{state}", self.base_path());
        let body = self.client.put(&path, None, None).await?;
        self.entity_from(body)
    }

    /// Activates the provider user.
    ///
    /// # Errors
    ///
    /// See [`ProviderManager::set_state`].
    pub async fn activate(&self, id: u64) -> Result<Provider<'_>, ResourceError> {
        self.set_state(id, "activate").await
    }

    /// Suspends the provider user.
    ///
    /// # Errors
    ///
    /// See [`ProviderManager::set_state`].
    pub async fn suspend(&self, id: u64) -> Result<Provider<'_>, ResourceError> {
        self.set_state(id, "suspend").await
    }

    /// Resumes a suspended provider user.
    ///
    /// # Errors
    ///
    /// See [`ProviderManager::set_state`].
    pub async fn unsuspend(&self, id: u64) -> Result<Provider<'_>, ResourceError> {
        self.set_state(id, "unsuspend").await
    }

    /// Grants the admin role.
    ///
    /// # Errors
    ///
    /// See [`ProviderManager::set_state`].
    pub async fn set_as_admin(&self, id: u64) -> Result<Provider<'_>, ResourceError> {
        self.set_state(id, "admin").await
    }

    /// Grants the member role.
    ///
    /// # Errors
    ///
    /// See [`ProviderManager::set_state`].
    pub async fn set_as_member(&self, id: u64) -> Result<Provider<'_>, ResourceError> {
        self.set_state(id, "member").await
    }
}

impl Manager for ProviderManager {
    const ENTITY_NAME: &'static str = "user";
    const COLLECTION_NAME: &'static str = "users";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/users")
    }
}

impl List for ProviderManager {}
impl Read for ProviderManager {}
impl Create for ProviderManager {}
impl Update for ProviderManager {}
impl Delete for ProviderManager {}

/// A provider user entity.
pub type Provider<'a> = Resource<'a, ProviderManager>;

impl<'a> Provider<'a> {
    /// Puts this provider user into the given state or role.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the user has no id, plus
    /// transport errors.
    pub async fn set_state(&self, state: &str) -> Result<Provider<'a>, ResourceError> {
        let id = self.require_id("set_state")?;
        self.manager().set_state(id, state).await
    }

    /// Activates this provider user.
    ///
    /// # Errors
    ///
    /// See [`Provider::set_state`].
    pub async fn activate(&self) -> Result<Provider<'a>, ResourceError> {
        self.set_state("activate").await
    }

    /// Suspends this provider user.
    ///
    /// # Errors
    ///
    /// See [`Provider::set_state`].
    pub async fn suspend(&self) -> Result<Provider<'a>, ResourceError> {
        self.set_state("suspend").await
    }

    /// Resumes this provider user.
    ///
    /// # Errors
    ///
    /// See [`Provider::set_state`].
    pub async fn unsuspend(&self) -> Result<Provider<'a>, ResourceError> {
        self.set_state("unsuspend").await
    }

    /// Grants this provider user the admin role.
    ///
    /// # Errors
    ///
    /// See [`Provider::set_state`].
    pub async fn as_admin(&self) -> Result<Provider<'a>, ResourceError> {
        self.set_state("admin").await
    }

    /// Grants this provider user the member role.
    ///
    /// # Errors
    ///
    /// See [`Provider::set_state`].
    pub async fn as_member(&self) -> Result<Provider<'a>, ResourceError> {
        self.set_state("member").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::tests::test_client;

    #[test]
    fn test_base_path_and_envelope_keys() {
        let manager = ProviderManager::new(test_client());
        assert_eq!(manager.base_path(), "/admin/api/users");
        assert_eq!(ProviderManager::ENTITY_NAME, "user");
        assert_eq!(ProviderManager::COLLECTION_NAME, "users");
    }
}
