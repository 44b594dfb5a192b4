//! File access API endpoints
//!
//! The catch-all reader treats the remainder of the URL as an opaque
//! filesystem path. The upload endpoint shows the two multipart reading
//! styles side by side: buffering one field whole and draining another
//! chunk by chunk.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path};
use axum::Json;
use serde::Serialize;

use crate::api::ApiError;
use crate::validation::FieldError;

/// GET /files/{*file_path} - Read a file from disk as a JSON string
///
/// A missing file is not an error here; the failure text is returned as
/// the body so the caller can see exactly what the server tried to open.
pub async fn get_file(Path(file_path): Path<String>) -> Result<Json<String>, ApiError> {
    match tokio::fs::read_to_string(&file_path).await {
        Ok(contents) => Ok(Json(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %file_path, "requested file does not exist");
            Ok(Json(err.to_string()))
        }
        Err(err) => Err(ApiError::internal_error(format!(
            "Failed to read {file_path}: {err}"
        ))),
    }
}

/// Size report for the buffered upload field
#[derive(Debug, Serialize)]
pub struct UploadSummary {
    pub file_size: usize,
}

/// POST /uploadfiles/ - Accept a three-field multipart upload
///
/// Expects "file" (buffered), "fileb" (streamed) and "title". Unknown
/// fields are skipped; missing ones are reported together. Only the
/// buffered field's size makes it into the response.
pub async fn upload_files(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadSummary>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::validation_error(e.body_text()))?;
    let mut file_size: Option<usize> = None;
    let mut fileb_size: Option<usize> = None;
    let mut title: Option<String> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation_error(format!("Malformed multipart body: {}", e)))?
    {
        match field.name().unwrap_or("") {
            "file" => {
                let data = field.bytes().await.map_err(|e| {
                    ApiError::internal_error(format!("Failed to read upload: {}", e))
                })?;
                file_size = Some(data.len());
            }
            "fileb" => {
                let filename = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let mut streamed = 0;
                while let Some(chunk) = field.chunk().await.map_err(|e| {
                    ApiError::internal_error(format!("Failed to read upload: {}", e))
                })? {
                    streamed += chunk.len();
                }
                tracing::debug!(
                    ?filename,
                    ?content_type,
                    bytes = streamed,
                    "drained streamed upload field"
                );
                fileb_size = Some(streamed);
            }
            "title" => {
                let text = field.text().await.map_err(|e| {
                    ApiError::internal_error(format!("Failed to read upload: {}", e))
                })?;
                title = Some(text);
            }
            _ => {}
        }
    }

    let mut errors = Vec::new();
    if file_size.is_none() {
        errors.push(FieldError::missing("file"));
    }
    if fileb_size.is_none() {
        errors.push(FieldError::missing("fileb"));
    }
    if title.is_none() {
        errors.push(FieldError::missing("title"));
    }
    match file_size {
        Some(file_size) if errors.is_empty() => Ok(Json(UploadSummary { file_size })),
        _ => Err(errors.into()),
    }
}
