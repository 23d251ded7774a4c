/// Blocking HTTP client implementation.
///
/// This module provides `ApiClient` for issuing GET and JSON POST requests,
/// along with the uniform `HttpResult` shape and the transport error type.
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

/// Base URL used when neither the builder nor the environment provides one.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in";

const BASE_URL_ENV_VAR: &str = "REQRES_BASE_URL";
const API_KEY_ENV_VAR: &str = "REQRES_API_KEY";
const API_KEY_HEADER: &str = "x-api-key";

/// Errors that can occur before a response is received.
///
/// HTTP error statuses are not errors here: they come back in `HttpResult`.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network-related errors (connection refused, DNS resolution, etc.)
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Request or response timeout errors
    #[error("Request timed out")]
    Timeout(#[source] reqwest::Error),

    /// Invalid base URL configuration
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Transport(error)
        }
    }
}

/// Status code and raw body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResult {
    pub status: u16,
    pub body: String,
}

impl HttpResult {
    /// Creates a new `HttpResult`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Builder for constructing `ApiClient` instances.
///
/// # Examples
///
/// ```
/// use reqres_check::http::ApiClientBuilder;
///
/// let client = ApiClientBuilder::new()
///     .base_url("http://localhost:8080")
///     .build()
///     .expect("Failed to create client");
/// assert_eq!(client.base_url(), "http://localhost:8080");
/// ```
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Creates a new `ApiClientBuilder` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL of the API under test (e.g. "https://reqres.in").
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API key sent in the `x-api-key` header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets a whole-request timeout. Without it the client default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the `ApiClient` with the configured settings.
    ///
    /// # Environment Variables
    ///
    /// If `base_url()` was not called, `REQRES_BASE_URL` is used, falling back
    /// to `https://reqres.in`. If `api_key()` was not called, `REQRES_API_KEY`
    /// is used when set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::InvalidUrl` if the base URL does not parse.
    pub fn build(self) -> Result<ApiClient, HttpError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => {
                std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            }
        };
        let base_url = base_url.trim_end_matches('/').to_string();

        let api_key = self.api_key.or_else(|| {
            std::env::var(API_KEY_ENV_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty())
        });

        reqwest::Url::parse(&base_url)
            .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::Transport)?;

        Ok(ApiClient {
            client,
            base_url,
            api_key,
        })
    }
}

/// Trait for the two HTTP helpers every test case uses.
///
/// Cases receive a `&dyn ApiClientTrait`, so unit tests can substitute a
/// canned implementation for the live client.
pub trait ApiClientTrait: Send + Sync {
    /// Issues a GET for `path` (relative to the base URL).
    fn get(&self, path: &str) -> Result<HttpResult, HttpError>;

    /// POSTs `body` as `application/json` to `path`.
    fn post_json(&self, path: &str, body: &str) -> Result<HttpResult, HttpError>;
}

/// Synchronous HTTP client for the API under test.
///
/// Holds one connection pool for the whole run. It should be constructed
/// using `ApiClientBuilder`.
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Returns the base URL configured for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `true` if requests carry an API key header.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Joins `path` onto the base URL.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn execute(
        &self,
        method: &str,
        request: reqwest::blocking::RequestBuilder,
        url: &str,
    ) -> Result<HttpResult, HttpError> {
        let request = match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        };

        let response = request.send().map_err(|e| {
            tracing::warn!(method, url, error = %e, "request failed");
            HttpError::from_reqwest(e)
        })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(HttpError::from_reqwest)?;

        tracing::debug!(method, url, status, bytes = body.len(), "response received");
        Ok(HttpResult { status, body })
    }
}

impl ApiClientTrait for ApiClient {
    fn get(&self, path: &str) -> Result<HttpResult, HttpError> {
        let url = self.url_for(path);
        self.execute("GET", self.client.get(&url), &url)
    }

    fn post_json(&self, path: &str, body: &str) -> Result<HttpResult, HttpError> {
        let url = self.url_for(path);
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned());
        self.execute("POST", request, &url)
    }
}
