// src/application/commands/join_requests.rs
use std::sync::Arc;

use super::non_blank;
use crate::{
    application::{
        dto::{AuthenticatedAdmin, JoinRequestDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        customer::ShopName,
        join_request::{JoinRequestId, JoinRequestRepository, NewJoinRequest},
    },
};

#[derive(Debug, Default)]
pub struct SubmitJoinRequestCommand {
    pub shop_name: Option<String>,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
}

pub struct JoinRequestCommandService {
    repo: Arc<dyn JoinRequestRepository>,
    clock: Arc<dyn Clock>,
}

impl JoinRequestCommandService {
    pub fn new(repo: Arc<dyn JoinRequestRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn submit(
        &self,
        command: SubmitJoinRequestCommand,
    ) -> ApplicationResult<JoinRequestDto> {
        let shop_name = ShopName::new(command.shop_name.unwrap_or_default())?;
        let created = self
            .repo
            .insert(NewJoinRequest {
                shop_name,
                owner_name: non_blank(command.owner_name),
                phone: non_blank(command.phone),
                email: non_blank(command.email),
                category: non_blank(command.category),
                location: non_blank(command.location),
                message: non_blank(command.message),
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(join_request_id = created.id.0, "join request received");
        Ok(created.into())
    }

    pub async fn delete(&self, actor: &AuthenticatedAdmin, id: i64) -> ApplicationResult<()> {
        let id = JoinRequestId::new(id)?;
        self.repo.delete(id).await?;
        tracing::info!(admin = %actor.username, join_request_id = id.0, "join request deleted");
        Ok(())
    }
}
