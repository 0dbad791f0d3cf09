//! Dataset and general file upload endpoints
//!
//! Two endpoints, two contracts. `/upload-dataset` enforces the dataset
//! extension allow-list and DICOM content probe; `/upload` takes anything,
//! either as multipart bytes or as a `file_path` reference that is only
//! checked for existence. They stay separate on purpose.

use std::path::PathBuf;

use axum::{
    body::to_bytes,
    extract::{FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::DomainError;

const REFERENCE_BODY_LIMIT: usize = 64 * 1024;

/// Response for a stored or referenced file
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub path: PathBuf,
}

/// JSON body for reference-mode uploads
#[derive(Debug, Clone, Deserialize)]
struct ReferenceRequest {
    file_path: String,
}

/// POST /api/upload-dataset
///
/// Multipart form with a `file` part. Accepted extensions: npy, png, dcm.
pub async fn upload_dataset(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let (filename, data) = read_file_part(multipart)
        .await?
        .ok_or(DomainError::NoFile)?;

    let asset = state.uploads.save_dataset_file(&filename, &data)?;
    debug!(file = %asset.file_name, "Dataset uploaded");

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        path: asset.path,
    }))
}

/// POST /api/upload
///
/// Either a multipart form with a `file` part (stored, no extension policy)
/// or a JSON body `{"file_path": "..."}` referencing an existing file.
pub async fn upload_or_reference(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<UploadResponse>, ApiError> {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(req, &())
            .await
            .map_err(|e| ApiError::bad_request(format!("Malformed multipart request: {e}")))?;

        let (filename, data) = read_file_part(multipart)
            .await?
            .ok_or(DomainError::NoInput)?;

        let filename = (!filename.is_empty()).then_some(filename);
        let asset = state.uploads.store_file(filename.as_deref(), &data)?;
        debug!(file = %asset.file_name, "File uploaded");

        return Ok(Json(UploadResponse {
            message: "File uploaded successfully".to_string(),
            path: asset.path,
        }));
    }

    // Reference mode: a small JSON body naming a path. Anything that does
    // not parse into one counts as "no input", matching the upload contract.
    let body = to_bytes(req.into_body(), REFERENCE_BODY_LIMIT)
        .await
        .map_err(|_| DomainError::NoInput)?;
    let reference: ReferenceRequest =
        serde_json::from_slice(&body).map_err(|_| DomainError::NoInput)?;

    let asset = state.uploads.resolve_reference(&reference.file_path)?;
    debug!(path = %asset.path.display(), "File reference accepted");

    Ok(Json(UploadResponse {
        message: "File reference accepted".to_string(),
        path: asset.path,
    }))
}

/// Pull the `file` part out of a multipart form, if present.
async fn read_file_part(mut multipart: Multipart) -> Result<Option<(String, Bytes)>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart field: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file part: {e}")))?;

        return Ok(Some((filename, data)));
    }

    Ok(None)
}
