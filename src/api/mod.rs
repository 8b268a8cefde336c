//! REST client for the salon backend.
//!
//! Persistence, conflict checking (double bookings, staff schedules), and
//! authorization all live server-side; this layer only shapes requests,
//! attaches the session token, and maps HTTP failures onto `AppError`.

pub mod appointments;
pub mod auth;
pub mod clients;
pub mod services;

use std::sync::{Arc, RwLock};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::http_config::HttpConfig;
use crate::utils::retry::RetryConfig;

/// Error payload the backend returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
    retry: RetryConfig,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let base = Url::parse(&config.api_base_url)
            .map_err(|e| AppError::config(format!("Invalid API base URL: {}", e)))?;
        let http_config = HttpConfig::booking_api();
        let http = http_config
            .build_client()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            base,
            http,
            retry: http_config.to_retry_config(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn set_token(&self, token: Option<String>) {
        // Lock poisoning only happens if a writer panicked; treat as fatal.
        *self.token.write().expect("token lock poisoned") = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    pub(crate) fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Resolve an endpoint path against the base URL. The base's own path
    /// segment (e.g. `/api`) is preserved.
    pub(crate) fn endpoint(&self, path: &str) -> AppResult<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| AppError::config("API base URL cannot be a base"))?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    pub(crate) fn get(&self, path: &str) -> AppResult<RequestBuilder> {
        Ok(self.http.get(self.endpoint(path)?))
    }

    pub(crate) fn post(&self, path: &str) -> AppResult<RequestBuilder> {
        Ok(self.http.post(self.endpoint(path)?))
    }

    pub(crate) fn put(&self, path: &str) -> AppResult<RequestBuilder> {
        Ok(self.http.put(self.endpoint(path)?))
    }

    pub(crate) fn delete(&self, path: &str) -> AppResult<RequestBuilder> {
        Ok(self.http.delete(self.endpoint(path)?))
    }

    /// Send a request with the session token attached and decode the JSON
    /// response, mapping HTTP failure statuses onto the error taxonomy.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let request = self.authorize(request);
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or_else(|| status.to_string());

        Err(match status {
            StatusCode::UNAUTHORIZED => AppError::auth("Session expired, please sign in again"),
            StatusCode::FORBIDDEN => AppError::permission_denied(message),
            StatusCode::NOT_FOUND => AppError::not_found(message),
            _ if status.is_server_error() => {
                AppError::operation_failed(format!("Server error ({}): {}", status.as_u16(), message))
            }
            _ => AppError::api(status.as_u16(), message),
        })
    }

    /// Variant of `send` for endpoints that return no body.
    pub(crate) async fn send_no_content(&self, request: RequestBuilder) -> AppResult<()> {
        let request = self.authorize(request);
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or_else(|| status.to_string());
        Err(match status {
            StatusCode::UNAUTHORIZED => AppError::auth("Session expired, please sign in again"),
            StatusCode::FORBIDDEN => AppError::permission_denied(message),
            StatusCode::NOT_FOUND => AppError::not_found(message),
            _ => AppError::api(status.as_u16(), message),
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.read().expect("token lock poisoned").as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base: &str) -> ApiClient {
        let config = AppConfig {
            api_base_url: base.to_string(),
            ..AppConfig::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_preserves_base_path() {
        let client = test_client("http://localhost:8080/api");
        let url = client.endpoint("appointments").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/appointments");
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let client = test_client("http://localhost:8080/api/");
        let url = client.endpoint("clients/42").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/clients/42");
    }

    #[test]
    fn test_token_round_trip() {
        let client = test_client("http://localhost:8080/api");
        assert!(!client.has_token());
        client.set_token(Some("abc".to_string()));
        assert!(client.has_token());
        client.set_token(None);
        assert!(!client.has_token());
    }
}
