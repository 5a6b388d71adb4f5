//! Access to the REST backend that owns the users and accounts.

mod http_backend;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::Error;

pub use http_backend::{DEFAULT_API_BASE_URL, HttpBackend};

/// The single point through which the console talks to the backend.
///
/// Implementations send `body` as JSON for every method except GET. A
/// successful call yields the parsed JSON body, or `None` when the backend
/// sent no usable body. Any failure is logged before it is returned, and is
/// terminal for the user action that caused it: there are no retries.
#[async_trait]
pub trait Backend: std::fmt::Debug + Send + Sync {
    /// Send a `method` request to `endpoint`, a path relative to the
    /// backend's base URL such as `/users/`.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::Api] if the backend answered with a non-2xx status,
    /// - [Error::Transport] if the backend could not be reached,
    /// - [Error::InvalidResponse] if an error body was not valid JSON.
    async fn call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>, Error>;
}
