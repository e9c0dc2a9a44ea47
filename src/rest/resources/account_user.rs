//! The AccountUser resource, nested under an account.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::{Create, Delete, List, Manager, Read, Resource, ResourceError, Update};

/// Manager for `/admin/api/accounts/{account_id}/users`.
///
/// The owning account id is captured at construction and used purely for
/// path composition.
pub struct AccountUserManager {
    pub(crate) client: Arc<HttpClient>,
    account_id: u64,
}

impl AccountUserManager {
    /// Creates a user manager bound to the given account.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, account_id: u64) -> Self {
        Self { client, account_id }
    }

    /// Returns the owning account id.
    #[must_use]
    pub const fn account_id(&self) -> u64 {
        self.account_id
    }

    /// Puts the user into the given state or role (`activate`, `suspend`,
    /// `unsuspend`, `admin`, `member`).
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn set_state(&self, id: u64, state: &str) -> Result<AccountUser<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, id, state, "set state");
        let path = format!("{}/{id}/{state}", self.base_path());
        let body = self.client.put(&path, None, None).await?;
        self.entity_from(body)
    }
}

impl Manager for AccountUserManager {
    const ENTITY_NAME: &'static str = "user";
    const COLLECTION_NAME: &'static str = "users";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/accounts/{}/users", self.account_id)
    }
}

impl List for AccountUserManager {}
impl Read for AccountUserManager {}
impl Create for AccountUserManager {}
impl Update for AccountUserManager {}
impl Delete for AccountUserManager {}

/// An account user entity.
pub type AccountUser<'a> = Resource<'a, AccountUserManager>;

impl<'a> AccountUser<'a> {
    /// Puts this user into the given state or role.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the user has no id, plus
    /// transport errors.
    pub async fn set_state(&self, state: &str) -> Result<AccountUser<'a>, ResourceError> {
        let id = self.require_id("set_state")?;
        self.manager().set_state(id, state).await
    }

    /// Activates this user.
    ///
    /// # Errors
    ///
    /// See [`AccountUser::set_state`].
    pub async fn activate(&self) -> Result<AccountUser<'a>, ResourceError> {
        self.set_state("activate").await
    }

    /// Suspends this user.
    ///
    /// # Errors
    ///
    /// See [`AccountUser::set_state`].
    pub async fn suspend(&self) -> Result<AccountUser<'a>, ResourceError> {
        self.set_state("suspend").await
    }

    /// Resumes this user.
    ///
    /// # Errors
    ///
    /// See [`AccountUser::set_state`].
    pub async fn unsuspend(&self) -> Result<AccountUser<'a>, ResourceError> {
        self.set_state("unsuspend").await
    }

    /// Grants this user the admin role.
    ///
    /// # Errors
    ///
    /// See [`AccountUser::set_state`].
    pub async fn as_admin(&self) -> Result<AccountUser<'a>, ResourceError> {
        self.set_state("admin").await
    }

    /// Grants this user the member role.
    ///
    /// # Errors
    ///
    /// See [`AccountUser::set_state`].
    pub async fn as_member(&self) -> Result<AccountUser<'a>, ResourceError> {
        self.set_state("member").await
    }
}
