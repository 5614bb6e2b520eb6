// src/application/queries/enquiries.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        dto::{EnquiryDto, ShopSummaryDto},
        error::ApplicationResult,
    },
    domain::{
        customer::{CustomerFilter, CustomerId, CustomerRepository},
        enquiry::EnquiryRepository,
    },
};

pub struct EnquiryQueryService {
    enquiries: Arc<dyn EnquiryRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl EnquiryQueryService {
    pub fn new(
        enquiries: Arc<dyn EnquiryRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            enquiries,
            customers,
        }
    }

    pub async fn list_enquiries(&self) -> ApplicationResult<Vec<EnquiryDto>> {
        let enquiries = self.enquiries.list().await?;
        if enquiries.is_empty() {
            return Ok(Vec::new());
        }

        let shops: HashMap<CustomerId, ShopSummaryDto> = self
            .customers
            .list(&CustomerFilter::default())
            .await?
            .iter()
            .map(|customer| (customer.id, ShopSummaryDto::from(customer)))
            .collect();

        Ok(enquiries
            .into_iter()
            .map(|enquiry| {
                let shop = shops.get(&enquiry.shop_id).cloned();
                EnquiryDto::from_parts(enquiry, shop)
            })
            .collect())
    }
}
