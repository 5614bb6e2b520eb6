// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{path::PathBuf, sync::Arc};

/// Router-level knobs that come from configuration.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub uploads_dir: PathBuf,
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub rate_limit_login: bool,
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub settings: Arc<HttpSettings>,
}
