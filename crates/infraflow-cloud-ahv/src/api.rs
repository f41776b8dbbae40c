//! Prism REST API v2.0 client
//!
//! Basic-auth JSON client for the Prism gateway. All paths passed to the
//! transport are relative to the API root (e.g. `vms/{uuid}/clone`).

use crate::error::{AhvError, Result};
use async_trait::async_trait;
use infraflow_config::AhvConfig;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;

/// Versioned API path below the Prism base URL
pub const API_PATH: &str = "PrismGateway/services/rest/v2.0/";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Derive the API root from a Prism base URL.
///
/// Idempotent: a URL that already ends in the API path is returned with only
/// its trailing slash normalised, so deriving twice never duplicates the path.
pub fn api_root(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = API_PATH.trim_end_matches('/');

    if base.ends_with(path) {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, API_PATH)
    }
}

/// 2xx is success, everything else is a failure
pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        is_success(self.status)
    }

    /// Turn a non-2xx response into `AhvError::Status`
    pub fn check(self, action: impl FnOnce() -> String) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AhvError::Status {
                action: action(),
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// Request/response exchange with the Prism API
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, path: &str) -> Result<ApiResponse>;

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<ApiResponse>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
    root: String,
    username: String,
    password: String,
}

impl HttpTransport {
    pub fn new(config: &AhvConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(AhvError::ClientBuild)?;

        Ok(Self {
            client,
            root: api_root(&config.url),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// API root every path is joined onto
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.root, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        method: &'static str,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(source) => return Err(AhvError::Transport { method, url, source }),
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(AhvError::Transport { method, url, source }),
        };

        tracing::debug!("{} {} -> HTTP {}", method, url, status);
        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<ApiResponse> {
        let url = self.url(path);
        tracing::debug!("Getting data from URL: {}", url);

        let request = self.client.get(&url);
        self.send("GET", url, request).await
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<ApiResponse> {
        let url = self.url(path);
        tracing::debug!("Posting data to URL: {}", url);

        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body);
        self.send("POST", url, request).await
    }
}
