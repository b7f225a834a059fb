use cndr_core::{
    ApiResponse, HealthStatus, NewUser, Page, PaginatedResponse, PaginationParams, User,
};
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::ClientError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server origin, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Sent as `Authorization: Bearer <key>` when present.
    pub api_key: Option<String>,
    /// Whole-request timeout; defaults to [`DEFAULT_TIMEOUT`].
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for the cndr API.
///
/// Calls never return `Err`: HTTP errors and transport failures come back as
/// an `ApiResponse` with `success == false` and a message in `error`.
#[derive(Debug, Clone)]
pub struct CndrClient {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    http: reqwest::Client,
}

impl CndrClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let timeout = config.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The WebSocket handshake endpoint on the same server.
    pub fn handshake_endpoint(&self) -> String {
        let ws_base = if let Some(rest) = self.base_url.strip_prefix("https://") {
            format!("wss://{}", rest)
        } else if let Some(rest) = self.base_url.strip_prefix("http://") {
            format!("ws://{}", rest)
        } else {
            self.base_url.clone()
        };
        format!("{}/ws", ws_base)
    }

    pub async fn health(&self) -> ApiResponse<HealthStatus> {
        self.request(Method::GET, "/health", None::<&()>).await
    }

    pub async fn get_user(&self, id: &str) -> ApiResponse<User> {
        self.request(Method::GET, &format!("/users/{}", id), None::<&()>)
            .await
    }

    pub async fn list_users(&self, page: u32, limit: u32) -> PaginatedResponse<User> {
        self.request::<Page<User>, ()>(
            Method::GET,
            &format!("/users?page={}&limit={}", page, limit),
            None,
        )
        .await
    }

    /// First page with the server's default page size.
    pub async fn list_users_default(&self) -> PaginatedResponse<User> {
        self.list_users(PaginationParams::DEFAULT_PAGE, PaginationParams::DEFAULT_LIMIT)
            .await
    }

    pub async fn create_user(&self, user: &NewUser) -> ApiResponse<User> {
        self.request(Method::POST, "/users", Some(user)).await
    }

    async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match self.send(method, endpoint, body).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", endpoint, e);
                ApiResponse::err(e.to_string())
            }
        }
    }

    async fn send<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, reqwest::Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let error = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| {
                    format!(
                        "HTTP {}: {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("Unknown")
                    )
                });
            return Ok(ApiResponse::err(error));
        }

        Ok(serde_json::from_slice::<ApiResponse<T>>(&bytes)
            .unwrap_or_else(|e| ApiResponse::err(format!("Invalid response body: {}", e))))
    }
}
