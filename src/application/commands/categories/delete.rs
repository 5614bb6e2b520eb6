use super::CategoryCommandService;
use crate::{
    application::{dto::AuthenticatedAdmin, error::ApplicationResult},
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedAdmin,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(admin = %actor.username, category_id = id.0, "category deleted");
        Ok(())
    }
}
