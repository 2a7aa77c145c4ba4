//! Upload validation: the `file` field must name or declare a PDF and hold
//! between 1 byte and the configured ceiling.
//!
//! Size is checked twice, once on the declared `Content-Length` before the
//! body is read and once on the bytes actually received, since a proxy in
//! front of the service may not enforce the limit.

use axum::extract::Multipart;
use axum::http::{header, HeaderMap, StatusCode};
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Name of the multipart field carrying the résumé.
pub const FILE_FIELD: &str = "file";

/// Room for multipart boundaries and part headers on top of the file itself.
pub const MULTIPART_ENVELOPE_BYTES: usize = 64 * 1024;

/// A validated résumé upload.
#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Accepts a `.pdf` filename (any case) or a content type mentioning `pdf`.
pub fn is_pdf_upload(filename: Option<&str>, content_type: Option<&str>) -> bool {
    let by_name = filename.is_some_and(|f| f.to_lowercase().ends_with(".pdf"));
    let by_type = content_type.is_some_and(|t| t.to_lowercase().contains("pdf"));
    by_name || by_type
}

/// Rejects a request whose declared length cannot fit a file under `max_bytes`.
pub fn check_declared_length(headers: &HeaderMap, max_bytes: usize) -> Result<(), AppError> {
    let declared = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    match declared {
        Some(len) if len > (max_bytes + MULTIPART_ENVELOPE_BYTES) as u64 => {
            debug!(declared = len, "Upload rejected on Content-Length");
            Err(AppError::TooLarge)
        }
        _ => Ok(()),
    }
}

/// Rejects empty or oversized file contents.
pub fn check_payload(bytes: &[u8], max_bytes: usize) -> Result<(), AppError> {
    if bytes.is_empty() {
        return Err(AppError::EmptyPayload);
    }
    if bytes.len() > max_bytes {
        return Err(AppError::TooLarge);
    }
    Ok(())
}

/// Pulls the `file` field out of `multipart` and validates it.
/// Format is checked before any of the file body is read.
pub async fn read_upload(multipart: &mut Multipart, max_bytes: usize) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        debug!(%filename, ?content_type, "Received upload field");

        if !is_pdf_upload(Some(&filename), content_type.as_deref()) {
            return Err(AppError::InvalidFormat);
        }

        let bytes = field.bytes().await.map_err(multipart_error)?;
        check_payload(&bytes, max_bytes)?;

        return Ok(Upload {
            filename,
            content_type,
            bytes,
        });
    }

    Err(AppError::MissingFile)
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::TooLarge
    } else {
        AppError::Multipart(e.body_text())
    }
}
