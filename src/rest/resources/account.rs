//! The Account resource.
//!
//! Developer accounts are created through the signup endpoint (the same one
//! the developer portal uses), not a plain create; the manager therefore
//! exposes [`AccountManager::sign_up`] instead of the `Create` capability.
//! Account states (`approve`, `reject`, `make_pending`) are forwarded to the
//! remote service, which is the authority on transition legality.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::HttpClient;
use crate::rest::manager::ADMIN_PATH;
use crate::rest::resources::account_user::AccountUserManager;
use crate::rest::resources::application::ApplicationManager;
use crate::rest::{Delete, Fields, List, Manager, Read, Resource, ResourceError, Update};

/// Manager for `/admin/api/accounts`.
///
/// # Example
///
/// ```rust,ignore
/// let accounts = client.accounts();
///
/// let mut attrs = threescale_api::Fields::new();
/// attrs.insert("org_name".into(), "acme".into());
/// attrs.insert("username".into(), "admin".into());
///
/// let account = accounts.sign_up(attrs).await?;
/// let approved = accounts.approve(account.id().unwrap()).await?;
/// ```
pub struct AccountManager {
    pub(crate) client: Arc<HttpClient>,
}

impl AccountManager {
    /// Creates an account manager over the given transport.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Creates a developer account the way the developer portal does.
    ///
    /// The attributes must carry `org_name` and `username`; optional keys
    /// like `email`, `password`, and the `*_plan_id` family are forwarded
    /// as-is. A default user is created alongside the account.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn sign_up(&self, attributes: Fields) -> Result<Account<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "sign up");
        let body = self
            .client
            .post(&format!("{ADMIN_PATH}/signup"), &Value::Object(attributes), None)
            .await?;
        self.entity_from(body)
    }

    /// Puts the account into the given state (`approve`, `reject`,
    /// `make_pending`).
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn set_state(&self, id: u64, state: &str) -> Result<Account<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, id, state, "set state");
        let path = format!("{}/{id}/{state}", self.base_path());
        let body = self.client.put(&path, None, None).await?;
        self.entity_from(body)
    }

    /// Approves the account.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn approve(&self, id: u64) -> Result<Account<'_>, ResourceError> {
        self.set_state(id, "approve").await
    }

    /// Rejects the account.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn reject(&self, id: u64) -> Result<Account<'_>, ResourceError> {
        self.set_state(id, "reject").await
    }

    /// Resets the account to pending.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn make_pending(&self, id: u64) -> Result<Account<'_>, ResourceError> {
        self.set_state(id, "make_pending").await
    }

    /// Changes the account's plan.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    pub async fn change_plan(&self, id: u64, plan_id: u64) -> Result<Account<'_>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, id, plan_id, "change plan");
        let mut attributes = Fields::new();
        attributes.insert("plan_id".to_string(), Value::from(plan_id));
        let path = format!("{}/{id}/change_plan", self.base_path());
        let body = self
            .client
            .put(&path, Some(&Value::Object(attributes)), None)
            .await?;
        self.entity_from(body)
    }
}

impl Manager for AccountManager {
    const ENTITY_NAME: &'static str = "account";
    const COLLECTION_NAME: &'static str = "accounts";

    fn client(&self) -> &HttpClient {
        &self.client
    }

    fn base_path(&self) -> String {
        format!("{ADMIN_PATH}/accounts")
    }
}

impl List for AccountManager {}
impl Read for AccountManager {}
impl Update for AccountManager {}
impl Delete for AccountManager {}

/// An account entity.
pub type Account<'a> = Resource<'a, AccountManager>;

impl<'a> Account<'a> {
    /// Returns the users manager bound to this account.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the account has no id.
    pub fn users(&self) -> Result<AccountUserManager, ResourceError> {
        let id = self.require_id("users")?;
        Ok(AccountUserManager::new(Arc::clone(&self.manager().client), id))
    }

    /// Returns the applications manager bound to this account.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the account has no id.
    pub fn applications(&self) -> Result<ApplicationManager, ResourceError> {
        let id = self.require_id("applications")?;
        Ok(ApplicationManager::new(Arc::clone(&self.manager().client), id))
    }

    /// Puts this account into the given state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the account has no id, plus
    /// transport errors.
    pub async fn set_state(&self, state: &str) -> Result<Account<'a>, ResourceError> {
        let id = self.require_id("set_state")?;
        self.manager().set_state(id, state).await
    }

    /// Approves this account.
    ///
    /// # Errors
    ///
    /// See [`Account::set_state`].
    pub async fn approve(&self) -> Result<Account<'a>, ResourceError> {
        self.set_state("approve").await
    }

    /// Rejects this account.
    ///
    /// # Errors
    ///
    /// See [`Account::set_state`].
    pub async fn reject(&self) -> Result<Account<'a>, ResourceError> {
        self.set_state("reject").await
    }

    /// Resets this account to pending.
    ///
    /// # Errors
    ///
    /// See [`Account::set_state`].
    pub async fn make_pending(&self) -> Result<Account<'a>, ResourceError> {
        self.set_state("make_pending").await
    }

    /// Changes this account's plan.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the account has no id, plus
    /// transport errors.
    pub async fn change_plan(&self, plan_id: u64) -> Result<Account<'a>, ResourceError> {
        let id = self.require_id("change_plan")?;
        self.manager().change_plan(id, plan_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::tests::test_client;
    use serde_json::json;

    #[test]
    fn test_base_path() {
        let manager = AccountManager::new(test_client());
        assert_eq!(manager.base_path(), "/admin/api/accounts");
    }

    #[test]
    fn test_envelope_keys() {
        assert_eq!(AccountManager::ENTITY_NAME, "account");
        assert_eq!(AccountManager::COLLECTION_NAME, "accounts");
    }

    #[test]
    fn test_sub_managers_require_persisted_account() {
        let manager = AccountManager::new(test_client());
        let account = manager
            .entity_from(json!({"account": {"id": 12, "org_name": "acme"}}))
            .unwrap();
        assert!(account.users().is_ok());
        assert!(account.applications().is_ok());

        let unpersisted = Resource::new(&manager, Some(Fields::new()));
        assert!(matches!(
            unpersisted.users(),
            Err(ResourceError::MissingId { operation: "users" })
        ));
    }
}
