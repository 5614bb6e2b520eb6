// src/domain/customer/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::customer::value_objects::{CustomerId, ShopName};
use crate::domain::location::LocationId;
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

/// Free-form contact and presentation details of a shop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerProfile {
    pub owner_name: Option<String>,
    pub owner_phone: Option<String>,
    pub shop_phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub shop_description: Option<String>,
    pub shop_article: Option<String>,
}

/// Stored upload file names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPhotos {
    pub shop_photo: Option<String>,
    pub shop_photos: Vec<String>,
    pub owner_photo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub shop_name: ShopName,
    pub slug: Option<Slug>,
    pub profile: CustomerProfile,
    pub photos: CustomerPhotos,
    pub category_id: CategoryId,
    pub location_id: LocationId,
    pub joined_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Applies every supplied field of `update`; absent fields keep their value.
    pub fn apply(&mut self, update: CustomerUpdate) {
        if let Some(shop_name) = update.shop_name {
            self.shop_name = shop_name;
        }
        if let Some(slug) = update.slug {
            self.slug = Some(slug);
        }
        update.profile.apply_to(&mut self.profile);
        if let Some(shop_photo) = update.shop_photo {
            self.photos.shop_photo = Some(shop_photo);
        }
        if let Some(shop_photos) = update.shop_photos {
            self.photos.shop_photos = shop_photos;
        }
        if let Some(owner_photo) = update.owner_photo {
            self.photos.owner_photo = Some(owner_photo);
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        if let Some(location_id) = update.location_id {
            self.location_id = location_id;
        }
        if let Some(joined_at) = update.joined_at {
            self.joined_at = joined_at;
        }
        self.updated_at = update.updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub shop_name: ShopName,
    pub slug: Slug,
    pub profile: CustomerProfile,
    pub photos: CustomerPhotos,
    pub category_id: CategoryId,
    pub location_id: LocationId,
    pub joined_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Per-field patch for [`CustomerProfile`]. `Some(None)` clears a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::option_option)]
pub struct CustomerProfilePatch {
    pub owner_name: Option<Option<String>>,
    pub owner_phone: Option<Option<String>>,
    pub shop_phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub shop_description: Option<Option<String>>,
    pub shop_article: Option<Option<String>>,
}

impl CustomerProfilePatch {
    pub fn apply_to(self, profile: &mut CustomerProfile) {
        fn set(target: &mut Option<String>, value: Option<Option<String>>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut profile.owner_name, self.owner_name);
        set(&mut profile.owner_phone, self.owner_phone);
        set(&mut profile.shop_phone, self.shop_phone);
        set(&mut profile.email, self.email);
        set(&mut profile.website, self.website);
        set(&mut profile.address, self.address);
        set(&mut profile.shop_description, self.shop_description);
        set(&mut profile.shop_article, self.shop_article);
    }
}

#[derive(Debug, Clone)]
#[allow(clippy::option_option)]
pub struct CustomerUpdate {
    pub id: CustomerId,
    pub shop_name: Option<ShopName>,
    pub slug: Option<Slug>,
    pub profile: CustomerProfilePatch,
    pub shop_photo: Option<String>,
    pub shop_photos: Option<Vec<String>>,
    pub owner_photo: Option<String>,
    pub category_id: Option<CategoryId>,
    pub location_id: Option<LocationId>,
    pub joined_at: Option<Option<DateTime<Utc>>>,
    pub updated_at: DateTime<Utc>,
}

impl CustomerUpdate {
    pub fn new(id: CustomerId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            shop_name: None,
            slug: None,
            profile: CustomerProfilePatch::default(),
            shop_photo: None,
            shop_photos: None,
            owner_photo: None,
            category_id: None,
            location_id: None,
            joined_at: None,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub category_id: Option<CategoryId>,
    pub location_id: Option<LocationId>,
    /// Case-insensitive substring of the shop name.
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn customer() -> Customer {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Customer {
            id: CustomerId(1),
            shop_name: ShopName::new("Corner Store").unwrap(),
            slug: Some(Slug::new("corner-store").unwrap()),
            profile: CustomerProfile {
                owner_name: Some("Ana".into()),
                email: Some("ana@example.com".into()),
                ..CustomerProfile::default()
            },
            photos: CustomerPhotos {
                shop_photos: vec!["a.jpg".into()],
                ..CustomerPhotos::default()
            },
            category_id: CategoryId(1),
            location_id: LocationId(1),
            joined_at: Some(at),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn apply_keeps_absent_fields() {
        let mut customer = customer();
        let later = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let mut update = CustomerUpdate::new(customer.id, later);
        update.profile.owner_name = Some(Some("Bea".into()));
        update.profile.email = Some(None);
        update.joined_at = Some(None);

        customer.apply(update);

        assert_eq!(customer.shop_name.as_str(), "Corner Store");
        assert_eq!(customer.profile.owner_name.as_deref(), Some("Bea"));
        assert_eq!(customer.profile.email, None);
        assert_eq!(customer.joined_at, None);
        assert_eq!(customer.photos.shop_photos, vec!["a.jpg".to_string()]);
        assert_eq!(customer.updated_at, later);
    }

    #[test]
    fn supplied_photo_list_replaces_stored_one() {
        let mut customer = customer();
        let mut update = CustomerUpdate::new(customer.id, customer.updated_at);
        update.shop_photos = Some(vec!["b.jpg".into(), "c.jpg".into()]);

        customer.apply(update);

        assert_eq!(customer.photos.shop_photos.len(), 2);
        assert_eq!(customer.photos.shop_photos[0], "b.jpg");
    }
}
