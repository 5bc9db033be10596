use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{DomainError, ValidationError};
use serde_json::json;
use thiserror::Error;

/// Body returned for any failure the caller cannot correct.
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => Self::Validation(e),
            DomainError::Storage(msg) => Self::Storage(msg),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedPayload(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Storage detail is logged by the service; callers only see the generic message.
        let message = if status.is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
