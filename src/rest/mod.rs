//! The generic resource layer for the 3scale admin API.
//!
//! Two abstractions compose everything here:
//!
//! - **[`Manager`]** owns a base path and the JSON envelope keys for one
//!   resource family, and (through the capability traits [`List`], [`Read`],
//!   [`Create`], [`Update`], [`Delete`]) the CRUD contract over it.
//! - **[`Resource`]** is a mutable entity mapping backed by a reference to
//!   its producing manager, supporting self-directed update/delete/reload.
//!
//! Concrete resource families live in [`resources`]; each is a thin
//! specialization that names its envelope keys, composes its path segment
//! (possibly parameterized by captured parent ids), and adds one-line verbs
//! for its resource-specific endpoints.
//!
//! # Control flow
//!
//! caller → concrete manager → generic manager logic → transport → JSON
//! decode → [`extract`] → entity wrap → concrete entity.
//!
//! # Example
//!
//! ```rust,ignore
//! use threescale_api::rest::{Create, Delete, List, Read};
//!
//! let services = client.services();
//!
//! let mut attrs = threescale_api::Fields::new();
//! attrs.insert("name".into(), "backend".into());
//! attrs.insert("system_name".into(), "backend".into());
//!
//! let service = services.create(attrs).await?;
//! let metric = service.metrics()?.read_by_name("hits").await?;
//! ```

mod entity;
mod errors;
mod extract;
mod manager;
pub mod resources;

pub use entity::{Fields, Resource};
pub use errors::ResourceError;
pub use extract::{extract, Extracted};
pub use manager::{Create, Delete, List, Manager, Read, Update, NAME_FIELDS};
