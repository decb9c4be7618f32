//! Where a completed submission's metadata is sent.

use crate::{
    models::file_metadata::{FileMetadata, NewFileMetadata},
    services::metadata_service::{MetadataError, MetadataService},
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Store(#[from] MetadataError),
    #[error("request to metadata API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("metadata API answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Persists the record produced when a submission completes.
#[async_trait]
pub trait MetadataSink: Send + Sync {
    async fn save(&self, record: NewFileMetadata) -> Result<FileMetadata, SinkError>;
}

/// In-process sink writing straight to the database.
#[async_trait]
impl MetadataSink for MetadataService {
    async fn save(&self, record: NewFileMetadata) -> Result<FileMetadata, SinkError> {
        Ok(self.create(record).await?)
    }
}

/// Sink that POSTs to `/api/file-metadata` on a running site.
#[derive(Clone, Debug)]
pub struct HttpMetadataSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpMetadataSink {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/file-metadata", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MetadataSink for HttpMetadataSink {
    async fn save(&self, record: NewFileMetadata) -> Result<FileMetadata, SinkError> {
        let response = self.client.post(&self.endpoint).json(&record).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SinkError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<FileMetadata>().await?)
    }
}
