use super::LocationCommandService;
use crate::{
    application::{
        dto::{AuthenticatedAdmin, LocationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::location::{LocationId, LocationName, LocationUpdate},
};

pub struct UpdateLocationCommand {
    pub id: i64,
    pub name: String,
}

impl LocationCommandService {
    pub async fn update_location(
        &self,
        actor: &AuthenticatedAdmin,
        command: UpdateLocationCommand,
    ) -> ApplicationResult<LocationDto> {
        let name = LocationName::new(command.name)?;
        let id = LocationId::new(command.id)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("location not found"))?;

        if self.repo.find_by_name(&name, Some(id)).await?.is_some() {
            return Err(ApplicationError::conflict("location already exists"));
        }

        let now = self.clock.now();
        let updated = self
            .slugs
            .write_with_unique_slug(Some(name.as_str()), Some(id.0), |slug| {
                self.repo.update(LocationUpdate {
                    id,
                    name: name.clone(),
                    slug,
                    updated_at: now,
                })
            })
            .await?;

        tracing::info!(admin = %actor.username, location_id = id.0, "location updated");
        Ok(updated.into())
    }
}
