use super::{
    CustomerCommandService, CustomerUploads, parse_joined_at,
    service::{parse_category_id, parse_location_id},
};
use crate::{
    application::{
        commands::non_blank,
        dto::{AuthenticatedAdmin, CustomerDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::Category,
        customer::{CustomerPhotos, CustomerProfile, NewCustomer, ShopName},
        location::Location,
    },
};

#[derive(Debug, Default)]
pub struct CreateCustomerCommand {
    pub shop_name: Option<String>,
    pub profile: CustomerProfile,
    /// Category id as submitted.
    pub category: Option<String>,
    pub location: Option<String>,
    pub joined_at: Option<String>,
    pub uploads: CustomerUploads,
}

impl CustomerCommandService {
    pub async fn create_customer(
        &self,
        actor: &AuthenticatedAdmin,
        command: CreateCustomerCommand,
    ) -> ApplicationResult<CustomerDto> {
        let (category, location) = self
            .resolve_references(command.category.as_deref(), command.location.as_deref())
            .await?;
        let shop_name = ShopName::new(command.shop_name.unwrap_or_default())?;
        let joined_at = match non_blank(command.joined_at) {
            Some(raw) => parse_joined_at(&raw)?,
            None => None,
        };

        let stored = self.store_uploads(command.uploads).await?;
        let photos = CustomerPhotos {
            shop_photo: stored.shop_photo,
            shop_photos: stored.shop_photos.unwrap_or_default(),
            owner_photo: stored.owner_photo,
        };

        let now = self.clock.now();
        let profile = command.profile;
        let created = self
            .slugs
            .write_with_unique_slug(Some(shop_name.as_str()), None, |slug| {
                self.customers.insert(NewCustomer {
                    shop_name: shop_name.clone(),
                    slug,
                    profile: profile.clone(),
                    photos: photos.clone(),
                    category_id: category.id,
                    location_id: location.id,
                    joined_at,
                    created_at: now,
                })
            })
            .await?;

        tracing::info!(
            admin = %actor.username,
            customer_id = created.id.0,
            slug = ?created.slug.as_ref().map(ToString::to_string),
            "customer created"
        );
        Ok(CustomerDto::from_parts(
            created,
            Some(category.into()),
            Some(location.into()),
        ))
    }

    async fn resolve_references(
        &self,
        category: Option<&str>,
        location: Option<&str>,
    ) -> ApplicationResult<(Category, Location)> {
        let invalid = || ApplicationError::validation("invalid category or location");

        let category = match category.and_then(parse_category_id) {
            Some(id) => self.categories.find_by_id(id).await?,
            None => None,
        };
        let location = match location.and_then(parse_location_id) {
            Some(id) => self.locations.find_by_id(id).await?,
            None => None,
        };

        match (category, location) {
            (Some(category), Some(location)) => Ok((category, location)),
            _ => Err(invalid()),
        }
    }
}
