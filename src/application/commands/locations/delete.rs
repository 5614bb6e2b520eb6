use super::LocationCommandService;
use crate::{
    application::{dto::AuthenticatedAdmin, error::ApplicationResult},
    domain::location::LocationId,
};

pub struct DeleteLocationCommand {
    pub id: i64,
}

impl LocationCommandService {
    pub async fn delete_location(
        &self,
        actor: &AuthenticatedAdmin,
        command: DeleteLocationCommand,
    ) -> ApplicationResult<()> {
        let id = LocationId::new(command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(admin = %actor.username, location_id = id.0, "location deleted");
        Ok(())
    }
}
