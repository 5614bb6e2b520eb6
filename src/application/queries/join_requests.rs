use std::sync::Arc;

use crate::{
    application::{dto::JoinRequestDto, error::ApplicationResult},
    domain::join_request::JoinRequestRepository,
};

pub struct JoinRequestQueryService {
    repo: Arc<dyn JoinRequestRepository>,
}

impl JoinRequestQueryService {
    pub fn new(repo: Arc<dyn JoinRequestRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_join_requests(&self) -> ApplicationResult<Vec<JoinRequestDto>> {
        let requests = self.repo.list().await?;
        Ok(requests.into_iter().map(Into::into).collect())
    }
}
