//! The shared default-plan capability.
//!
//! Account, service, and application plans all carry a single-default
//! invariant that the *remote service* enforces: marking one plan default
//! clears the previous one. The client only forwards the request and
//! reflects whatever the server reports in the `default` field.

use serde_json::Value;

use crate::rest::{List, Resource, ResourceError};

/// Default-plan handling shared by every plan manager.
#[allow(async_fn_in_trait)]
pub trait DefaultPlan: List {
    /// Marks the plan as the default. The remote service clears the
    /// previous default.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    async fn set_default(&self, id: u64) -> Result<Resource<'_, Self>, ResourceError> {
        tracing::debug!(entity = Self::ENTITY_NAME, id, "set default");
        let path = format!("{}/{id}/default", self.base_path());
        let body = self.client().put(&path, None, None).await?;
        self.entity_from(body)
    }

    /// Returns the plan currently marked default, or `None`.
    ///
    /// # Errors
    ///
    /// Returns transport errors and envelope-shape errors.
    async fn get_default(&self) -> Result<Option<Resource<'_, Self>>, ResourceError> {
        self.find(None, |plan| {
            plan.get("default").and_then(Value::as_bool) == Some(true)
        })
        .await
    }
}

impl<'a, M: DefaultPlan> Resource<'a, M> {
    /// Marks this plan as the default.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the plan has no id, plus
    /// transport errors.
    pub async fn set_default(&self) -> Result<Resource<'a, M>, ResourceError> {
        let id = self.require_id("set_default")?;
        self.manager().set_default(id).await
    }
}
