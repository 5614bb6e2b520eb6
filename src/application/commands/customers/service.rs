use std::sync::Arc;

use crate::{
    application::{
        dto::CustomerDto,
        error::ApplicationResult,
        ports::{storage::FileStore, time::Clock},
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        customer::{Customer, CustomerRepository},
        location::{LocationId, LocationRepository},
        slug::UniqueSlugService,
    },
};

pub struct CustomerCommandService {
    pub(super) customers: Arc<dyn CustomerRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) locations: Arc<dyn LocationRepository>,
    pub(super) slugs: Arc<UniqueSlugService>,
    pub(super) files: Arc<dyn FileStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CustomerCommandService {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        categories: Arc<dyn CategoryRepository>,
        locations: Arc<dyn LocationRepository>,
        slugs: Arc<UniqueSlugService>,
        files: Arc<dyn FileStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            customers,
            categories,
            locations,
            slugs,
            files,
            clock,
        }
    }

    pub(super) async fn with_references(&self, customer: Customer) -> ApplicationResult<CustomerDto> {
        let category = self.categories.find_by_id(customer.category_id).await?;
        let location = self.locations.find_by_id(customer.location_id).await?;
        Ok(CustomerDto::from_parts(
            customer,
            category.map(Into::into),
            location.map(Into::into),
        ))
    }
}

/// Parses a reference id sent as form text. Anything unparsable resolves to nothing.
pub(super) fn parse_category_id(raw: &str) -> Option<CategoryId> {
    raw.trim().parse::<i64>().ok().and_then(|id| CategoryId::new(id).ok())
}

pub(super) fn parse_location_id(raw: &str) -> Option<LocationId> {
    raw.trim().parse::<i64>().ok().and_then(|id| LocationId::new(id).ok())
}
