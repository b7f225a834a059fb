use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniform envelope for every HTTP response body.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (_, _) => Err(self.error.unwrap_or_else(|| "Unknown error".to_string())),
        }
    }
}

/// One page of a listing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

pub type PaginatedResponse<T> = ApiResponse<Page<T>>;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    #[serde(default = "PaginationParams::default_page")]
    pub page: u32,
    #[serde(default = "PaginationParams::default_limit")]
    pub limit: u32,
}

impl PaginationParams {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;

    fn default_page() -> u32 {
        Self::DEFAULT_PAGE
    }

    fn default_limit() -> u32 {
        Self::DEFAULT_LIMIT
    }

    /// Number of items to skip before this page starts. Pages are 1-based.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.limit as usize)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Payload of `GET /health`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        }
    }
}
