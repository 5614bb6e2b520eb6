use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedAdmin, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryName, CategoryUpdate},
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: String,
}

impl CategoryCommandService {
    /// Renames the category and regenerates its slug. Renaming to the current
    /// name keeps the current slug since the record's own slug is excluded
    /// from the uniqueness probe.
    pub async fn update_category(
        &self,
        actor: &AuthenticatedAdmin,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let id = CategoryId::new(command.id)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        if self.repo.find_by_name(&name, Some(id)).await?.is_some() {
            return Err(ApplicationError::conflict("category already exists"));
        }

        let now = self.clock.now();
        let updated = self
            .slugs
            .write_with_unique_slug(Some(name.as_str()), Some(id.0), |slug| {
                self.repo.update(CategoryUpdate {
                    id,
                    name: name.clone(),
                    slug,
                    updated_at: now,
                })
            })
            .await?;

        tracing::info!(admin = %actor.username, category_id = id.0, "category updated");
        Ok(updated.into())
    }
}
