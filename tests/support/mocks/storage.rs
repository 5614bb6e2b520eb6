// tests/support/mocks/storage.rs
use std::sync::Mutex;

use async_trait::async_trait;
use shop_directory::application::{
    ApplicationResult,
    ports::storage::{FileStore, UploadedFile},
};

/// Names files `<field>-<n>` and remembers every save.
#[derive(Default)]
pub struct RecordingFileStore {
    saved: Mutex<Vec<String>>,
}

impl RecordingFileStore {
    pub fn saved(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileStore for RecordingFileStore {
    async fn save(&self, file: UploadedFile) -> ApplicationResult<String> {
        let mut saved = self.saved.lock().unwrap();
        let name = format!("{}-{}", file.field, saved.len() + 1);
        saved.push(name.clone());
        Ok(name)
    }
}
