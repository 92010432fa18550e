//! Integration tests for the Golden Bowl API.
//!
//! These tests talk to a running server over HTTP, so they exercise the real
//! document store rather than the in-memory one used by the router tests.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the API against a scratch database
//! MONGO_DB_NAME=golden_bowl_test cargo run -p golden-bowl-api
//!
//! # Run integration tests
//! cargo test -p golden-bowl-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `health` - liveness and readiness
//! - `catalog` - users and items
//! - `orders` - order creation and updates
//! - `session` - the active session singleton

use serde_json::Value;

/// Base URL used when `API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Shared client and base URL for one test.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestContext {
    /// Build a context from `API_BASE_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn get_json(&self, path: &str) -> reqwest::Result<(u16, Value)> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }

    /// Send `body` as JSON with `method` and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn send_json(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &Value,
    ) -> reqwest::Result<(u16, Value)> {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }

    /// DELETE `path` and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn delete_json(&self, path: &str) -> reqwest::Result<(u16, Value)> {
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }
}

/// A value unique to this test run, for tagging created records.
#[must_use]
pub fn unique_tag(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!("{prefix}-{nanos}")
}
