use super::{CategoryDto, LocationDto};
use crate::domain::customer::Customer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i64,
    pub shop_name: String,
    pub slug: Option<String>,
    pub owner_name: Option<String>,
    pub owner_phone: Option<String>,
    pub shop_phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub shop_description: Option<String>,
    pub shop_article: Option<String>,
    pub shop_photo: Option<String>,
    pub shop_photos: Vec<String>,
    pub owner_photo: Option<String>,
    pub category_id: i64,
    pub location_id: i64,
    /// Embedded category; absent only if the reference could not be resolved.
    pub category: Option<CategoryDto>,
    pub location: Option<LocationDto>,
    pub joined_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CustomerDto {
    pub fn from_parts(
        customer: Customer,
        category: Option<CategoryDto>,
        location: Option<LocationDto>,
    ) -> Self {
        let Customer {
            id,
            shop_name,
            slug,
            profile,
            photos,
            category_id,
            location_id,
            joined_at,
            created_at,
            updated_at,
        } = customer;

        Self {
            id: id.into(),
            shop_name: shop_name.into(),
            slug: slug.map(Into::into),
            owner_name: profile.owner_name,
            owner_phone: profile.owner_phone,
            shop_phone: profile.shop_phone,
            email: profile.email,
            website: profile.website,
            address: profile.address,
            shop_description: profile.shop_description,
            shop_article: profile.shop_article,
            shop_photo: photos.shop_photo,
            shop_photos: photos.shop_photos,
            owner_photo: photos.owner_photo,
            category_id: category_id.into(),
            location_id: location_id.into(),
            category,
            location,
            joined_at,
            created_at,
            updated_at,
        }
    }
}
