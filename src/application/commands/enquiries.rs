// src/application/commands/enquiries.rs
use std::sync::Arc;

use super::non_blank;
use crate::{
    application::{
        dto::{AuthenticatedAdmin, EnquiryDto, ShopSummaryDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        customer::{CustomerId, CustomerRepository},
        enquiry::{EnquiryRepository, NewEnquiry},
    },
};

#[derive(Debug, Default)]
pub struct SubmitEnquiryCommand {
    pub shop_id: Option<i64>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub enquiry: Option<String>,
    pub referred_by: Option<String>,
}

pub struct EnquiryCommandService {
    enquiries: Arc<dyn EnquiryRepository>,
    customers: Arc<dyn CustomerRepository>,
    clock: Arc<dyn Clock>,
}

impl EnquiryCommandService {
    pub fn new(
        enquiries: Arc<dyn EnquiryRepository>,
        customers: Arc<dyn CustomerRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            enquiries,
            customers,
            clock,
        }
    }

    pub async fn submit(&self, command: SubmitEnquiryCommand) -> ApplicationResult<EnquiryDto> {
        let invalid = || ApplicationError::validation("invalid shop");
        let shop_id = command
            .shop_id
            .and_then(|id| CustomerId::new(id).ok())
            .ok_or_else(invalid)?;
        let shop = self.customers.find_by_id(shop_id).await?.ok_or_else(invalid)?;

        let created = self
            .enquiries
            .insert(NewEnquiry {
                shop_id,
                name: non_blank(command.name),
                phone: non_blank(command.phone),
                enquiry: non_blank(command.enquiry),
                referred_by: non_blank(command.referred_by),
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(shop_id = shop_id.0, enquiry_id = created.id.0, "enquiry received");
        Ok(EnquiryDto::from_parts(created, Some(ShopSummaryDto::from(&shop))))
    }

    /// Deletes every enquiry; returns the number removed.
    pub async fn clear(&self, actor: &AuthenticatedAdmin) -> ApplicationResult<u64> {
        let deleted = self.enquiries.delete_all().await?;
        tracing::info!(admin = %actor.username, deleted, "enquiries cleared");
        Ok(deleted)
    }
}
