use super::CustomerCommandService;
use crate::{
    application::{dto::AuthenticatedAdmin, error::ApplicationResult},
    domain::customer::CustomerId,
};

pub struct DeleteCustomerCommand {
    pub id: i64,
}

impl CustomerCommandService {
    /// Stored photo files are left in place.
    pub async fn delete_customer(
        &self,
        actor: &AuthenticatedAdmin,
        command: DeleteCustomerCommand,
    ) -> ApplicationResult<()> {
        let id = CustomerId::new(command.id)?;
        self.customers.delete(id).await?;
        tracing::info!(admin = %actor.username, customer_id = id.0, "customer deleted");
        Ok(())
    }
}
