// src/infrastructure/storage.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{FileStore, UploadedFile},
};
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Writes uploads into a local directory served under `/uploads`.
#[derive(Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }
}

/// `<field>-<unix millis>-<8 hex chars><.ext>`. The random part keeps two
/// uploads in the same millisecond apart.
fn stored_name(field: &str, original: Option<&str>) -> String {
    let field: String = field
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    let field = if field.is_empty() { "file".to_string() } else { field };
    let extension = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();
    let random = Uuid::new_v4().simple().to_string();
    format!(
        "{field}-{}-{}{extension}",
        Utc::now().timestamp_millis(),
        &random[..8]
    )
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, file: UploadedFile) -> ApplicationResult<String> {
        let name = stored_name(&file.field, file.file_name.as_deref());
        let path = self.root.join(&name);
        tokio::fs::write(&path, &file.bytes).await.map_err(|err| {
            tracing::error!(path = %path.display(), error = %err, "failed to store upload");
            ApplicationError::infrastructure(format!("failed to store upload: {err}"))
        })?;
        tracing::debug!(file = %name, bytes = file.bytes.len(), "upload stored");
        Ok(name)
    }
}
