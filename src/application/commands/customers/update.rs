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
        category::CategoryId,
        customer::{CustomerId, CustomerProfilePatch, CustomerUpdate, ShopName},
        location::LocationId,
    },
};

/// Partial update: `None` leaves a field untouched.
#[derive(Debug, Default)]
pub struct UpdateCustomerCommand {
    pub id: i64,
    pub shop_name: Option<String>,
    pub profile: CustomerProfilePatch,
    pub category: Option<String>,
    pub location: Option<String>,
    /// `Some("")` clears the date.
    pub joined_at: Option<String>,
    pub uploads: CustomerUploads,
}

impl CustomerCommandService {
    pub async fn update_customer(
        &self,
        actor: &AuthenticatedAdmin,
        command: UpdateCustomerCommand,
    ) -> ApplicationResult<CustomerDto> {
        let id = CustomerId::new(command.id)?;
        if self.customers.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("customer not found"));
        }

        let mut update = CustomerUpdate::new(id, self.clock.now());
        if let Some(raw) = non_blank(command.category) {
            update.category_id = Some(self.existing_category(&raw).await?);
        }
        if let Some(raw) = non_blank(command.location) {
            update.location_id = Some(self.existing_location(&raw).await?);
        }
        update.shop_name = command.shop_name.map(ShopName::new).transpose()?;
        update.joined_at = command
            .joined_at
            .as_deref()
            .map(parse_joined_at)
            .transpose()?;
        update.profile = command.profile;

        let stored = self.store_uploads(command.uploads).await?;
        update.shop_photo = stored.shop_photo;
        update.owner_photo = stored.owner_photo;
        update.shop_photos = stored.shop_photos;

        let updated = match update.shop_name.clone() {
            Some(shop_name) => {
                self.slugs
                    .write_with_unique_slug(Some(shop_name.as_str()), Some(id.0), |slug| {
                        let mut patch = update.clone();
                        patch.slug = Some(slug);
                        self.customers.update(patch)
                    })
                    .await?
            }
            None => self.customers.update(update).await?,
        };

        tracing::info!(admin = %actor.username, customer_id = id.0, "customer updated");
        self.with_references(updated).await
    }

    async fn existing_category(&self, raw: &str) -> ApplicationResult<CategoryId> {
        let invalid = || ApplicationError::validation("invalid category");
        let id = parse_category_id(raw).ok_or_else(invalid)?;
        self.categories
            .find_by_id(id)
            .await?
            .map(|category| category.id)
            .ok_or_else(invalid)
    }

    async fn existing_location(&self, raw: &str) -> ApplicationResult<LocationId> {
        let invalid = || ApplicationError::validation("invalid location");
        let id = parse_location_id(raw).ok_or_else(invalid)?;
        self.locations
            .find_by_id(id)
            .await?
            .map(|location| location.id)
            .ok_or_else(invalid)
    }
}
