// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// A file received in a multipart form, not yet persisted.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Form field the file arrived in, e.g. `shopPhoto`.
    pub field: String,
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persists the file and returns the stored name, which is unique per call.
    async fn save(&self, file: UploadedFile) -> ApplicationResult<String>;
}
