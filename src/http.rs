/// HTTP helper module.
///
/// This module provides a blocking HTTP client for the API under test that
/// normalizes every response into a status code and a raw text body.
mod client;

pub use client::{
    ApiClient, ApiClientBuilder, ApiClientTrait, DEFAULT_BASE_URL, HttpError, HttpResult,
};
