use crate::domain::admin::entity::{Admin, NewAdmin};
use crate::domain::admin::value_objects::Username;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn insert(&self, admin: NewAdmin) -> DomainResult<Admin>;
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Admin>>;
}
