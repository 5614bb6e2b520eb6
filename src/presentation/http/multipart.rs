// src/presentation/http/multipart.rs
use std::collections::HashMap;

use axum::extract::Multipart;

use crate::application::{
    commands::customers::CustomerUploads, ports::storage::UploadedFile,
};
use crate::domain::customer::{CustomerProfile, CustomerProfilePatch};

use super::error::{HttpError, HttpResult};

pub const SHOP_PHOTO_FIELD: &str = "shopPhoto";
pub const OWNER_PHOTO_FIELD: &str = "ownerPhoto";
pub const SHOP_PHOTOS_FIELD: &str = "shopPhotos";
pub const MAX_SHOP_PHOTOS: usize = 10;

/// A customer form split into its text fields and photo files.
#[derive(Debug, Default)]
pub struct CustomerForm {
    text: HashMap<String, String>,
    pub uploads: CustomerUploads,
}

impl CustomerForm {
    pub async fn read(mut multipart: Multipart) -> HttpResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match field.file_name().map(ToString::to_string) {
                Some(file_name) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|err| HttpError::bad_request(err.body_text()))?;
                    form.push_file(UploadedFile {
                        field: name,
                        file_name: Some(file_name).filter(|value| !value.is_empty()),
                        bytes,
                    })?;
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|err| HttpError::bad_request(err.body_text()))?;
                    form.text.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    fn push_file(&mut self, file: UploadedFile) -> HttpResult<()> {
        let too_many = |field: &str| HttpError::bad_request(format!("too many files for {field}"));
        match file.field.as_str() {
            SHOP_PHOTO_FIELD => {
                if self.uploads.shop_photo.is_some() {
                    return Err(too_many(SHOP_PHOTO_FIELD));
                }
                self.uploads.shop_photo = Some(file);
            }
            OWNER_PHOTO_FIELD => {
                if self.uploads.owner_photo.is_some() {
                    return Err(too_many(OWNER_PHOTO_FIELD));
                }
                self.uploads.owner_photo = Some(file);
            }
            SHOP_PHOTOS_FIELD => {
                if self.uploads.shop_photos.len() >= MAX_SHOP_PHOTOS {
                    return Err(too_many(SHOP_PHOTOS_FIELD));
                }
                self.uploads.shop_photos.push(file);
            }
            other => {
                return Err(HttpError::bad_request(format!("unexpected file field {other}")));
            }
        }
        Ok(())
    }

    /// Raw value of a text field, if it was sent.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.text.remove(key)
    }

    /// Trimmed value, with blanks treated as absent.
    pub fn take_filled(&mut self, key: &str) -> Option<String> {
        self.take(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// `None` when not sent, `Some(None)` when sent blank.
    pub fn take_patch(&mut self, key: &str) -> Option<Option<String>> {
        self.take(key).map(|value| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
    }

    pub fn take_profile(&mut self) -> CustomerProfile {
        CustomerProfile {
            owner_name: self.take_filled("ownerName"),
            owner_phone: self.take_filled("ownerPhone"),
            shop_phone: self.take_filled("shopPhone"),
            email: self.take_filled("email"),
            website: self.take_filled("website"),
            address: self.take_filled("address"),
            shop_description: self.take_filled("shopDescription"),
            shop_article: self.take_filled("shopArticle"),
        }
    }

    pub fn take_profile_patch(&mut self) -> CustomerProfilePatch {
        CustomerProfilePatch {
            owner_name: self.take_patch("ownerName"),
            owner_phone: self.take_patch("ownerPhone"),
            shop_phone: self.take_patch("shopPhone"),
            email: self.take_patch("email"),
            website: self.take_patch("website"),
            address: self.take_patch("address"),
            shop_description: self.take_patch("shopDescription"),
            shop_article: self.take_patch("shopArticle"),
        }
    }
}
