use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedAdmin, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedAdmin,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        if self.repo.find_by_name(&name, None).await?.is_some() {
            return Err(ApplicationError::conflict("category already exists"));
        }

        let now = self.clock.now();
        let created = self
            .slugs
            .write_with_unique_slug(Some(name.as_str()), None, |slug| {
                self.repo.insert(NewCategory::new(name.clone(), slug, now))
            })
            .await?;

        tracing::info!(admin = %actor.username, category = %created.name, "category created");
        Ok(created.into())
    }
}
