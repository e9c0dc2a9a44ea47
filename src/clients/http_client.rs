//! HTTP transport for the 3scale admin API.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! JSON requests against a 3scale admin portal.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header;
use reqwest::Method;
use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::config::ThreeScaleConfig;

/// Query parameters, URL-encoded into the request query string.
pub type Params = Vec<(String, String)>;

/// HTTP client for the 3scale admin API.
///
/// The client handles:
/// - Base URI construction from the configured admin endpoint
/// - Basic-Auth from the provider key, computed once at construction
/// - The `.json` suffix appended to every logical resource path
/// - Status-code mapping to success and error outcomes
///
/// Every operation issues one request and awaits the full response; there is
/// no retry, pooling beyond reqwest defaults, or request pipelining.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use threescale_api::{AdminEndpoint, HttpClient, ProviderKey, ThreeScaleConfig};
///
/// let config = ThreeScaleConfig::builder()
///     .endpoint(AdminEndpoint::new("https://acme-admin.3scale.net")?)
///     .provider_key(ProviderKey::new("my-key")?)
///     .build()?;
///
/// let client = HttpClient::new(&config);
/// let services = client.get("/admin/api/services", None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://acme-admin.3scale.net`).
    base_uri: String,
    /// Precomputed `Authorization` header value.
    auth_header: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// The Basic-Auth header is derived once from the provider key
    /// (`base64(":" + key)`) and reused for every request.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &ThreeScaleConfig) -> Self {
        let base_uri = config.endpoint().as_ref().to_string();

        let credentials = STANDARD.encode(format!(":{}", config.provider_key().as_ref()));
        let auth_header = format!("Basic {credentials}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!config.verify_ssl())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            auth_header,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the precomputed `Authorization` header value.
    #[must_use]
    pub fn auth_header(&self) -> &str {
        &self.auth_header
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a mapped error status.
    pub async fn get(&self, path: &str, params: Option<&Params>) -> Result<Value, HttpError> {
        self.request(Method::GET, path, None, params).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a mapped error status.
    pub async fn post(
        &self,
        path: &str,
        body: &Value,
        params: Option<&Params>,
    ) -> Result<Value, HttpError> {
        self.request(Method::POST, path, Some(body), params).await
    }

    /// Sends a PUT request with an optional JSON body.
    ///
    /// State-transition endpoints (`…/{id}/approve` and friends) are plain
    /// PUTs without a body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a mapped error status.
    pub async fn put(
        &self,
        path: &str,
        body: Option<&Value>,
        params: Option<&Params>,
    ) -> Result<Value, HttpError> {
        self.request(Method::PUT, path, body, params).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a mapped error status.
    pub async fn patch(
        &self,
        path: &str,
        body: &Value,
        params: Option<&Params>,
    ) -> Result<Value, HttpError> {
        self.request(Method::PATCH, path, Some(body), params).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a mapped error status.
    pub async fn delete(&self, path: &str, params: Option<&Params>) -> Result<Value, HttpError> {
        self.request(Method::DELETE, path, None, params).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        params: Option<&Params>,
    ) -> Result<Value, HttpError> {
        match body {
            Some(body) => tracing::debug!("[{method}] {path}: {body}"),
            None => tracing::debug!("[{method}] {path}"),
        }

        let url = format!("{}{path}.json", self.base_uri);

        let mut builder = self
            .client
            .request(method, url)
            .header(header::AUTHORIZATION, &self.auth_header)
            .header(header::ACCEPT, "application/json");

        if let Some(params) = params {
            builder = builder.query(params);
        }

        if let Some(body) = body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        let response = builder.send().await?;
        let code = response.status().as_u16();
        let text = response.text().await?;

        Self::interpret(code, path, text)
    }

    /// Maps a status code and raw body to the call outcome.
    ///
    /// 422 is decoded like a success so callers can inspect the validation
    /// errors the server reports.
    fn interpret(code: u16, path: &str, body: String) -> Result<Value, HttpError> {
        match code {
            200..=299 | 422 => Self::decode(path, &body),
            403 => Err(HttpError::Forbidden {
                path: path.to_string(),
            }),
            404 => Err(HttpError::NotFound {
                path: path.to_string(),
            }),
            _ => Err(HttpError::UnhandledResponse {
                code,
                path: path.to_string(),
                body,
            }),
        }
    }

    /// Decodes a response body; blank bodies decode to `Null`.
    fn decode(path: &str, body: &str) -> Result<Value, HttpError> {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(body).map_err(|source| HttpError::Decode {
            path: path.to_string(),
            source,
        })
    }
}
