//! HTTP client for the café API.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Paths of the API endpoints consumed by the client core.
pub mod endpoints {
    /// Order creation endpoint.
    pub const ORDERS: &str = "/api/orders";

    /// The authenticated user's order history.
    pub const MY_ORDERS: &str = "/api/orders/my-orders";

    /// Product detail endpoint.
    #[must_use]
    pub fn product(id: u64) -> String {
        format!("/api/products/{id}")
    }

    /// Order cancellation endpoint.
    #[must_use]
    pub fn cancel_order(id: u64) -> String {
        format!("/api/orders/{id}/cancel")
    }
}

/// Configuration for connecting to the café API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server address, e.g. `"http://localhost:3000"`.
    pub base_url: String,

    /// Bearer token attached to every request when present.
    pub token: Option<String>,
}

/// Envelope wrapping every successful API response body.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

/// Error body the API returns on rejection.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Errors raised by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("network error")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Rejected {
        /// HTTP status of the rejection.
        status: StatusCode,
        /// Server-provided reason, or a generic fallback.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// HTTP client for the café API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// GET `path` and decode the `data` envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unexpected response body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.http.get(self.url(path))).await
    }

    /// POST `body` as JSON to `path` and decode the `data` envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unexpected response body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    /// POST to `path` with no body and decode the `data` envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unexpected response body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.http.post(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .error
                .or(body.message)
                .unwrap_or_else(|| "request failed".to_string());

            return Err(ApiError::Rejected { status, message });
        }

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|error| ApiError::UnexpectedResponse(error.to_string()))?;

        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_endpoint_path() {
        assert_eq!(endpoints::product(7), "/api/products/7");
    }

    #[test]
    fn cancel_endpoint_path() {
        assert_eq!(endpoints::cancel_order(12), "/api/orders/12/cancel");
    }

    #[test]
    fn envelope_decodes_nested_data() {
        let envelope: ApiEnvelope<u64> =
            serde_json::from_str(r#"{"data": 42}"#).expect("envelope should decode");

        assert_eq!(envelope.data, 42);
    }
}
