//! Data-fetching layer over the storefront backend
//!
//! Provides a `DataLoader` that issues HTTP GETs against configured backend
//! paths, caches successful JSON bodies in the shared in-memory store, and a
//! `RequestState` projection that views render from. One loader call maps to
//! one request: there is no deduplication of concurrent identical requests,
//! no retry, and no cancellation.

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::cache::{CacheKey, CacheStore};

/// Fallback shown when an error carries no usable message
const GENERIC_ERROR: &str = "Something went wrong";

/// Errors that can occur when fetching data from the backend
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (connect, timeout, or body decode)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend responded with a non-success status
    #[error("Server returned {status}")]
    Status {
        /// The HTTP status code
        status: StatusCode,
        /// Server-sent `message` from the error body, if any
        message: Option<String>,
    },
}

impl FetchError {
    /// Projects the error into the string shown to the user
    ///
    /// Precedence follows the storefront convention: the server's own
    /// `{"message": ...}` body wins, then the error's display text, then a
    /// generic fallback.
    pub fn user_message(&self) -> String {
        if let FetchError::Status {
            message: Some(msg), ..
        } = self
        {
            if !msg.is_empty() {
                return msg.clone();
            }
        }

        let text = self.to_string();
        if text.is_empty() {
            GENERIC_ERROR.to_string()
        } else {
            text
        }
    }
}

/// Error body shape the backend uses for failed requests
#[derive(Debug, Deserialize)]
struct ServerMessage {
    message: String,
}

/// State of a single data request, as seen by the rendering layer
///
/// Transitions: `Idle` -> `Loading` when the request starts, then
/// `Loading` -> `Success` or `Loading` -> `Error` exactly once on completion.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    /// No request has been made yet
    Idle,
    /// A request is in flight
    Loading,
    /// The request completed with data
    Success(T),
    /// The request failed; holds the user-facing message
    Error(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    /// Marks the request as started
    pub fn start(&mut self) {
        *self = RequestState::Loading;
    }

    /// Resolves the request from a fetch result
    pub fn resolve(&mut self, result: Result<T, FetchError>) {
        *self = match result {
            Ok(data) => RequestState::Success(data),
            Err(err) => RequestState::Error(err.user_message()),
        };
    }

    /// Returns the data if the request succeeded
    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if the request failed
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Returns true while the request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Issues backend requests and serves them through the shared cache
///
/// Paths are resolved relative to the configured backend base URL. Successful
/// JSON bodies are written through to the cache under the caller's key with
/// the caller's TTL; failures are surfaced and never cached.
#[derive(Debug, Clone)]
pub struct DataLoader {
    client: Client,
    backend_url: String,
    cache: CacheStore,
}

impl DataLoader {
    /// Creates a loader for the given backend base URL with a fresh cache
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            backend_url: backend_url.into(),
            cache: CacheStore::new(),
        }
    }

    /// Creates a loader sharing an existing cache store
    pub fn with_cache(backend_url: impl Into<String>, cache: CacheStore) -> Self {
        Self {
            client: Client::new(),
            backend_url: backend_url.into(),
            cache,
        }
    }

    /// Returns the backend base URL this loader resolves paths against
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Returns a handle onto the loader's cache store
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Fetches JSON from `{backend_url}{path}`, serving fresh cache hits
    ///
    /// # Arguments
    /// * `path` - Backend path, starting with `/` (e.g. `/products/featured`)
    /// * `key` - Cache key for the response
    /// * `ttl_ms` - Freshness window for the cached response
    ///
    /// # Behavior
    /// - A fresh cached value is returned without touching the network
    /// - An expired or missing entry triggers a GET; the parsed body is
    ///   cached under `key` and returned
    /// - On failure the error is returned and the cache is left untouched
    pub async fn get<T>(&self, path: &str, key: &CacheKey, ttl_ms: u64) -> Result<T, FetchError>
    where
        T: DeserializeOwned + Serialize,
    {
        if let Some(cached) = self.cache.read::<T>(key) {
            if !cached.is_expired {
                return Ok(cached.data);
            }
        }

        let url = format!("{}{}", self.backend_url, path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<ServerMessage>(&body).ok())
                .map(|body| body.message);
            return Err(FetchError::Status { status, message });
        }

        let text = response.text().await?;
        let data: T = serde_json::from_str(&text)?;
        let _ = self.cache.write(key, &data, ttl_ms);
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Payload {
        id: String,
        price: f64,
    }

    /// A base URL nothing listens on, so any network attempt fails fast
    const DEAD_BACKEND: &str = "http://127.0.0.1:1";

    fn sample() -> Payload {
        Payload {
            id: "abc123".to_string(),
            price: 19.99,
        }
    }

    #[tokio::test]
    async fn test_fresh_cache_hit_skips_network() {
        let loader = DataLoader::new(DEAD_BACKEND);
        let key = CacheKey::new(["products", "featured"]);

        loader
            .cache()
            .write(&key, &sample(), 60_000)
            .expect("Priming the cache should succeed");

        // The backend is unreachable, so this only succeeds via the cache
        let result: Result<Payload, _> = loader.get("/products/featured", &key, 60_000).await;

        assert_eq!(result.expect("Cache hit should not hit the network"), sample());
    }

    #[tokio::test]
    async fn test_expired_cache_triggers_new_request() {
        let loader = DataLoader::new(DEAD_BACKEND);
        let key = CacheKey::new(["products", "featured"]);

        loader
            .cache()
            .write(&key, &sample(), 0)
            .expect("Priming the cache should succeed");
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        // The entry is expired, so the loader must go to the (dead) network
        let result: Result<Payload, _> = loader.get("/products/featured", &key, 60_000).await;

        assert!(
            matches!(result, Err(FetchError::Request(_))),
            "Expired entry should force a network attempt"
        );
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let loader = DataLoader::new(DEAD_BACKEND);
        let key = CacheKey::new(["categories"]);

        let result: Result<Payload, _> = loader.get("/category", &key, 60_000).await;

        assert!(result.is_err(), "Unreachable backend should fail");
        assert!(
            loader.cache().is_empty(),
            "Failed requests must not be cached"
        );
    }

    #[tokio::test]
    async fn test_request_state_transitions_once() {
        let loader = DataLoader::new(DEAD_BACKEND);
        let key = CacheKey::new(["products", "7"]);
        let mut state: RequestState<Payload> = RequestState::Idle;

        assert!(!state.is_loading());
        state.start();
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());

        let result = loader.get("/products/7", &key, 60_000).await;
        state.resolve(result);

        assert!(!state.is_loading(), "Loading must end exactly once");
        assert!(state.error().is_some(), "Failure should surface an error");
        assert!(state.data().is_none(), "Data stays unset on failure");
    }

    #[test]
    fn test_request_state_success_projection() {
        let mut state: RequestState<Payload> = RequestState::default();
        assert_eq!(state, RequestState::Idle);

        state.start();
        state.resolve(Ok(sample()));

        assert_eq!(state.data(), Some(&sample()));
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = FetchError::Status {
            status: StatusCode::NOT_FOUND,
            message: Some("Product not found.".to_string()),
        };
        assert_eq!(err.user_message(), "Product not found.");
    }

    #[test]
    fn test_user_message_falls_back_to_status_display() {
        let err = FetchError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(err.user_message(), "Server returned 500 Internal Server Error");
    }

    #[test]
    fn test_user_message_ignores_empty_server_message() {
        let err = FetchError::Status {
            status: StatusCode::BAD_REQUEST,
            message: Some(String::new()),
        };
        assert!(
            err.user_message().contains("400"),
            "Empty server message should fall back to the status text"
        );
    }

    #[test]
    fn test_server_message_body_parses() {
        let body: ServerMessage =
            serde_json::from_str(r#"{"message": "Invalid product id."}"#).expect("Should parse");
        assert_eq!(body.message, "Invalid product id.");
    }
}
