use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cndr_core::ApiResponse;
use thiserror::Error;
use tracing::error;

use crate::config::NodeEnv;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// `expose` controls whether the message reaches the response body.
    #[error("{message}")]
    Internal { message: String, expose: bool },
}

impl ServerError {
    pub fn internal(err: impl std::fmt::Display, node_env: NodeEnv) -> Self {
        ServerError::Internal {
            message: err.to_string(),
            expose: node_env.is_development(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Config(_) | ServerError::Io(_) | ServerError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            ServerError::NotFound(m) | ServerError::BadRequest(m) => m.clone(),
            ServerError::Internal { message, expose } => {
                error!(error = %message, "request failed");
                if *expose {
                    message.clone()
                } else {
                    "Internal Server Error".to_string()
                }
            }
            other => {
                error!(error = %other, "request failed");
                "Internal Server Error".to_string()
            }
        };

        (status, Json(ApiResponse::<()>::err(message))).into_response()
    }
}
