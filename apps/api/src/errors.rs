use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::resume::extract::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file provided")]
    MissingFile,

    #[error("Invalid format. Only PDF files are supported.")]
    InvalidFormat,

    #[error("Empty file.")]
    EmptyPayload,

    #[error("File too large. Max 5 MB.")]
    TooLarge,

    #[error("Failed to read PDF.")]
    DocumentParse(#[from] ExtractError),

    #[error("Failed to read upload.")]
    Multipart(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Wire shape of every error response: `{ "error": ..., "details": ... }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            AppError::DocumentParse(e) => Some(e.to_string()),
            AppError::Multipart(msg) => Some(msg.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            AppError::DocumentParse(e) => {
                tracing::warn!("Rejected unreadable PDF: {e}");
                self.to_string()
            }
            other => {
                tracing::debug!("Rejected upload: {other}");
                other.to_string()
            }
        };

        let body = Json(ErrorBody {
            error,
            details: self.details(),
        });

        (status, body).into_response()
    }
}
