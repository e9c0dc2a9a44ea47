//! HTTP transport for 3scale admin API communication.
//!
//! This module contains the [`HttpClient`] transport and its error type.
//! The transport issues authenticated JSON requests; everything above it
//! (managers, entities) lives in [`crate::rest`].

mod errors;
mod http_client;

pub use errors::HttpError;
pub use http_client::{HttpClient, Params};
