//! # 3scale Admin API client
//!
//! A Rust client library for the 3scale API Management admin REST API. It
//! wraps the admin portal's CRUD endpoints in resource managers (services,
//! accounts, applications, metrics, plans, …) and translates the JSON
//! responses into lightweight entity wrappers.
//!
//! ## Overview
//!
//! Two generic abstractions compose the whole library:
//!
//! - [`HttpClient`]: the transport, issuing authenticated JSON requests
//!   with status-code mapping to success or typed errors
//! - [`rest::Manager`] plus the capability traits ([`rest::List`],
//!   [`rest::Read`], [`rest::Create`], [`rest::Update`], [`rest::Delete`]):
//!   the shared CRUD contract, and [`Resource`], an entity mapping that can
//!   save, delete, and refresh itself through its manager
//!
//! Concrete resources are thin declarations on top: envelope keys, a path
//! segment, and one-line verbs for their specific endpoints.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use threescale_api::rest::{Create, List};
//! use threescale_api::{AdminEndpoint, Client, Fields, ProviderKey, ThreeScaleConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ThreeScaleConfig::builder()
//!     .endpoint(AdminEndpoint::new("https://acme-admin.3scale.net")?)
//!     .provider_key(ProviderKey::new("my-provider-key")?)
//!     .build()?;
//!
//! let client = Client::new(&config);
//! let services = client.services();
//!
//! // Create a service
//! let mut attrs = Fields::new();
//! attrs.insert("name".into(), "backend".into());
//! attrs.insert("system_name".into(), "backend".into());
//! let mut service = services.create(attrs).await?;
//!
//! // Mutate locally, then push
//! service.set("name", "backend-v2".into());
//! service.update().await?;
//!
//! // Walk the hierarchy: service → metrics → methods
//! let metrics = service.metrics()?;
//! let hits = metrics.read_by_name("hits").await?;
//!
//! // Tear down
//! service.delete().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! The transport maps 404 to [`HttpError::NotFound`] and 403 to
//! [`HttpError::Forbidden`]; any other non-success status fails loudly as
//! [`HttpError::UnhandledResponse`]. 422 bodies are decoded so validation
//! errors stay inspectable. Cleanup flows typically tolerate 404:
//!
//! ```rust,ignore
//! if let Err(e) = service.delete().await {
//!     if !e.is_not_found() {
//!         return Err(e.into());
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and fixed at
//!   construction
//! - **Untyped entities**: remote records are JSON mappings accessed by
//!   key; the server owns the schema
//! - **Capabilities as traits**: a manager exposes exactly the operations
//!   its endpoints support
//! - **One request per operation**: no retries, caching, or background
//!   tasks; the remote service is the source of truth

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::Client;
pub use clients::{HttpClient, HttpError, Params};
pub use config::{AdminEndpoint, ProviderKey, ThreeScaleConfig, ThreeScaleConfigBuilder};
pub use error::ConfigError;
pub use rest::{Fields, Resource, ResourceError};
