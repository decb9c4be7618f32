//! HTTP handlers for the file metadata API.

use crate::{
    errors::AppError,
    models::file_metadata::{FileMetadata, NewFileMetadata},
    services::metadata_service::MetadataService,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use tracing::info;

/// `POST /api/file-metadata` — validate and store one record.
pub async fn create_file_metadata(
    State(service): State<MetadataService>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload?;
    let new = NewFileMetadata::from_json(&body).map_err(AppError::validation)?;

    let record = service.create(new).await?;
    info!(id = record.id, filename = %record.filename, "stored file metadata");

    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /api/file-metadata` — every record.
pub async fn list_file_metadata(
    State(service): State<MetadataService>,
) -> Result<Json<Vec<FileMetadata>>, AppError> {
    Ok(Json(service.list().await?))
}

/// `GET /api/file-metadata/{id}` — one record.
pub async fn get_file_metadata(
    State(service): State<MetadataService>,
    Path(id): Path<String>,
) -> Result<Json<FileMetadata>, AppError> {
    let id = id
        .parse::<i64>()
        .map_err(|_| AppError::bad_request("Invalid ID format"))?;
    Ok(Json(service.get(id).await?))
}
