//! The generic resource manager contract.
//!
//! [`Manager`] is the base trait every concrete resource manager implements:
//! it names the JSON envelope keys and composes the base request path.
//! The CRUD contract on top of it is split into capability traits
//! ([`List`], [`Read`], [`Create`], [`Update`], [`Delete`]), each with a
//! default implementation, so a concrete manager opts into exactly the
//! operations its endpoints support. An operation a manager does not
//! implement does not exist on it, which is the compile-time version of a
//! "does the manager respond to this?" check.
//!
//! # Declaring a resource
//!
//! ```rust,ignore
//! pub struct ServiceManager {
//!     client: Arc<HttpClient>,
//! }
//!
//! impl Manager for ServiceManager {
//!     const ENTITY_NAME: &'static str = "service";
//!     const COLLECTION_NAME: &'static str = "services";
//!
//!     fn client(&self) -> &HttpClient {
//!         &self.client
//!     }
//!
//!     fn base_path(&self) -> String {
//!         format!("{ADMIN_PATH}/services")
//!     }
//! }
//!
//! impl List for ServiceManager {}
//! impl Read for ServiceManager {}
//! impl Create for ServiceManager {}
//! impl Update for ServiceManager {}
//! impl Delete for ServiceManager {}
//! ```

use serde_json::Value;

use crate::clients::{HttpClient, Params};
use crate::rest::entity::{Fields, Resource};
use crate::rest::errors::ResourceError;
use crate::rest::extract::{extract, Extracted};

/// Root path of the admin API.
pub(crate) const ADMIN_PATH: &str = "/admin/api";

/// Name-like fields consulted by [`List::read_by_name`], in priority order.
pub const NAME_FIELDS: &[&str] = &["system_name", "name", "org_name", "friendly_name", "username"];

/// The base contract shared by every resource manager.
///
/// A manager owns a base path (possibly parameterized by parent entity ids
/// captured at construction) and knows which envelope keys unwrap its
/// responses.
pub trait Manager: Sized {
    /// Singular key used to unwrap single-entity responses (e.g., `service`).
    const ENTITY_NAME: &'static str;

    /// Plural key used to unwrap collection responses (e.g., `services`).
    const COLLECTION_NAME: &'static str;

    /// Returns the transport used for requests.
    fn client(&self) -> &HttpClient;

    /// Returns the base path for this manager's endpoints.
    fn base_path(&self) -> String;

    /// Wraps an already-extracted entity mapping into a resource handle.
    fn wrap(&self, fields: Fields) -> Resource<'_, Self> {
        Resource::new(self, Some(fields))
    }

    /// Unwraps a response body into a single resource.
    ///
    /// A blank body produces an absent resource (field reads yield `None`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedShape`] when the body is a
    /// collection or an unrecognized shape.
    fn entity_from(&self, body: Value) -> Result<Resource<'_, Self>, ResourceError> {
        match extract(body, None, Self::ENTITY_NAME)? {
            Extracted::One(fields) => Ok(self.wrap(fields)),
            Extracted::Empty => Ok(Resource::new(self, None)),
            Extracted::Many(_) => Err(ResourceError::UnexpectedShape {
                detail: format!(
                    "expected a single '{}' entity, got a collection",
                    Self::ENTITY_NAME
                ),
            }),
        }
    }

    /// Unwraps a response body into a collection of resources, in server
    /// response order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedShape`] when the body does not
    /// carry the collection envelope.
    fn collection_from(&self, body: Value) -> Result<Vec<Resource<'_, Self>>, ResourceError> {
        match extract(body, Some(Self::COLLECTION_NAME), Self::ENTITY_NAME)? {
            Extracted::Many(items) => {
                Ok(items.into_iter().map(|fields| self.wrap(fields)).collect())
            }
            Extracted::One(fields) => Ok(vec![self.wrap(fields)]),
            Extracted::Empty => Ok(Vec::new()),
        }
    }
}

/// Listing, filtering, and name lookup.
#[allow(async_fn_in_trait)]
pub trait List: Manager {
    /// Lists all resources under the base path.
    ///
    /// Order is the server response order and is not guaranteed stable
    /// across calls.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    async fn list(&self, params: Option<Params>) -> Result<Vec<Resource<'_, Self>>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "list");
        let body = self.client().get(&self.base_path(), params.as_ref()).await?;
        self.collection_from(body)
    }

    /// Returns the first listed resource satisfying the predicate, or
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    async fn find<P>(
        &self,
        params: Option<Params>,
        mut predicate: P,
    ) -> Result<Option<Resource<'_, Self>>, ResourceError>
    where
        P: FnMut(&Resource<'_, Self>) -> bool,
    {
        tracing::debug!(entity = Self::ENTITY_NAME, "find");
        let resources = self.list(params).await?;
        Ok(resources.into_iter().find(|resource| predicate(resource)))
    }

    /// Looks a resource up by any of its name-like fields.
    ///
    /// The fields in [`NAME_FIELDS`] are checked in priority order
    /// (`system_name` first, `username` last); the first listed resource
    /// where any of them equals `name` wins.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    async fn read_by_name(&self, name: &str) -> Result<Option<Resource<'_, Self>>, ResourceError> {
        self.find(None, |resource| {
            NAME_FIELDS
                .iter()
                .any(|field| resource.get(field).and_then(Value::as_str) == Some(name))
        })
        .await
    }
}

/// Reading a single resource by id.
#[allow(async_fn_in_trait)]
pub trait Read: Manager {
    /// Reads the resource with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::NotFound`](crate::HttpError::NotFound) (wrapped)
    /// when the id does not exist, plus other transport errors.
    async fn read(&self, id: u64) -> Result<Resource<'_, Self>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, id, "read");
        let path = format!("{}/{id}", self.base_path());
        let body = self.client().get(&path, None).await?;
        self.entity_from(body)
    }
}

/// Creating resources.
#[allow(async_fn_in_trait)]
pub trait Create: Manager {
    /// Creates a resource from the given attributes. The server assigns the
    /// id.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    async fn create(&self, attributes: Fields) -> Result<Resource<'_, Self>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, "create");
        let body = self
            .client()
            .post(&self.base_path(), &Value::Object(attributes), None)
            .await?;
        self.entity_from(body)
    }
}

/// Updating resources.
#[allow(async_fn_in_trait)]
pub trait Update: Manager {
    /// Updates the resource identified by `attributes["id"]`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the attributes carry no
    /// usable `id`, plus transport errors.
    async fn update(&self, attributes: Fields) -> Result<Resource<'_, Self>, ResourceError> {
        let id = attributes
            .get("id")
            .and_then(Value::as_u64)
            .ok_or(ResourceError::MissingId {
                operation: "update",
            })?;
        self.update_with_id(id, attributes).await
    }

    /// Updates the resource with an explicit id.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    async fn update_with_id(
        &self,
        id: u64,
        attributes: Fields,
    ) -> Result<Resource<'_, Self>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, id, "update");
        let path = format!("{}/{id}", self.base_path());
        let body = self
            .client()
            .put(&path, Some(&Value::Object(attributes)), None)
            .await?;
        self.entity_from(body)
    }
}

/// Deleting resources.
#[allow(async_fn_in_trait)]
pub trait Delete: Manager {
    /// Deletes the resource with the given id.
    ///
    /// Returns `true` on success; does not verify the resource is gone.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::NotFound`](crate::HttpError::NotFound) (wrapped)
    /// when the id does not exist, plus other transport errors.
    async fn delete(&self, id: u64) -> Result<bool, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, id, "delete");
        let path = format!("{}/{id}", self.base_path());
        self.client().delete(&path, None).await?;
        Ok(true)
    }
}
