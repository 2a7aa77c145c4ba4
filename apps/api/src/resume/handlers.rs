use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::HeaderMap,
    Json,
};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::resume::analyze_document;
use crate::resume::models::AnalysisResponse;
use crate::resume::upload::{check_declared_length, read_upload, Upload};
use crate::state::AppState;

/// POST /analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let max_bytes = state.config.max_upload_bytes;
    check_declared_length(&headers, max_bytes)?;

    let mut multipart = multipart.map_err(|e| {
        debug!("Request is not a multipart upload: {e}");
        AppError::MissingFile
    })?;

    let Upload {
        filename,
        content_type,
        bytes,
    } = read_upload(&mut multipart, max_bytes).await?;
    info!(%filename, ?content_type, size = bytes.len(), "Analyzing resume");

    // PDF parsing is CPU-bound.
    let response = tokio::task::spawn_blocking(move || analyze_document(&filename, &bytes))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    Ok(Json(response))
}
