use super::LocationCommandService;
use crate::{
    application::{
        dto::{AuthenticatedAdmin, LocationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::location::{LocationName, NewLocation},
};

pub struct CreateLocationCommand {
    pub name: String,
}

impl LocationCommandService {
    pub async fn create_location(
        &self,
        actor: &AuthenticatedAdmin,
        command: CreateLocationCommand,
    ) -> ApplicationResult<LocationDto> {
        let name = LocationName::new(command.name)?;
        if self.repo.find_by_name(&name, None).await?.is_some() {
            return Err(ApplicationError::conflict("location already exists"));
        }

        let now = self.clock.now();
        let created = self
            .slugs
            .write_with_unique_slug(Some(name.as_str()), None, |slug| {
                self.repo.insert(NewLocation::new(name.clone(), slug, now))
            })
            .await?;

        tracing::info!(admin = %actor.username, location = %created.name, "location created");
        Ok(created.into())
    }
}
