//! MetadataService: create and read file metadata rows in SQLite.
//!
//! Records are written once, when a simulated submission completes, and are
//! never updated or deleted.

use crate::models::file_metadata::{FileMetadata, NewFileMetadata};
use sqlx::SqlitePool;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("file metadata `{0}` not found")]
    NotFound(i64),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type MetadataResult<T> = Result<T, MetadataError>;

#[derive(Clone)]
pub struct MetadataService {
    /// Shared SQLite connection pool.
    pub db: Arc<SqlitePool>,
}

impl MetadataService {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Insert a row and return it with its assigned id.
    pub async fn create(&self, new: NewFileMetadata) -> MetadataResult<FileMetadata> {
        let record = sqlx::query_as::<_, FileMetadata>(
            r#"
            INSERT INTO file_metadata (title, filename, size, type, uploaded_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, COALESCE(title, '') AS title, filename, size, type, uploaded_at
            "#,
        )
        .bind(&new.title)
        .bind(&new.filename)
        .bind(&new.size)
        .bind(&new.mime_type)
        .bind(&new.uploaded_at)
        .fetch_one(&*self.db)
        .await?;

        debug!(id = record.id, filename = %record.filename, "inserted file metadata");
        Ok(record)
    }

    /// Fetch one row by id.
    pub async fn get(&self, id: i64) -> MetadataResult<FileMetadata> {
        sqlx::query_as::<_, FileMetadata>(
            "SELECT id, COALESCE(title, '') AS title, filename, size, type, uploaded_at
             FROM file_metadata WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&*self.db)
        .await?
        .ok_or(MetadataError::NotFound(id))
    }

    /// Every row, oldest first.
    pub async fn list(&self) -> MetadataResult<Vec<FileMetadata>> {
        let rows = sqlx::query_as::<_, FileMetadata>(
            "SELECT id, COALESCE(title, '') AS title, filename, size, type, uploaded_at
             FROM file_metadata ORDER BY id ASC",
        )
        .fetch_all(&*self.db)
        .await?;
        Ok(rows)
    }

    /// Lightweight connectivity check (`SELECT 1`).
    pub async fn ping(&self) -> MetadataResult<()> {
        let value = sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&*self.db)
            .await?;
        debug!(value, "sqlite ping");
        Ok(())
    }
}
