use super::CustomerCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::UploadedFile,
};
use chrono::{DateTime, NaiveDate, Utc};

/// Photo files received with a create or update form.
#[derive(Debug, Clone, Default)]
pub struct CustomerUploads {
    pub shop_photo: Option<UploadedFile>,
    pub owner_photo: Option<UploadedFile>,
    pub shop_photos: Vec<UploadedFile>,
}

/// Stored names of the uploaded photos; `None` where nothing was uploaded.
#[derive(Debug, Default)]
pub(super) struct StoredPhotos {
    pub shop_photo: Option<String>,
    pub owner_photo: Option<String>,
    pub shop_photos: Option<Vec<String>>,
}

impl CustomerCommandService {
    pub(super) async fn store_uploads(
        &self,
        uploads: CustomerUploads,
    ) -> ApplicationResult<StoredPhotos> {
        let mut stored = StoredPhotos::default();
        if let Some(file) = uploads.shop_photo {
            stored.shop_photo = Some(self.files.save(file).await?);
        }
        if let Some(file) = uploads.owner_photo {
            stored.owner_photo = Some(self.files.save(file).await?);
        }
        if !uploads.shop_photos.is_empty() {
            let mut names = Vec::with_capacity(uploads.shop_photos.len());
            for file in uploads.shop_photos {
                names.push(self.files.save(file).await?);
            }
            stored.shop_photos = Some(names);
        }
        Ok(stored)
    }
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC).
/// Blank input means "no date".
pub fn parse_joined_at(raw: &str) -> ApplicationResult<Option<DateTime<Utc>>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| ApplicationError::validation("joinedAt must be an RFC 3339 timestamp or a YYYY-MM-DD date"))
}
