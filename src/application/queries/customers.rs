// src/application/queries/customers.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        commands::non_blank,
        dto::{CategoryDto, CustomerDto, LocationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        customer::{Customer, CustomerFilter, CustomerId, CustomerRepository, PhotoGroup},
        location::{LocationId, LocationRepository},
        slug::Slug,
    },
};

#[derive(Debug, Default)]
pub struct ListCustomersQuery {
    pub category: Option<i64>,
    pub location: Option<i64>,
    pub q: Option<String>,
}

pub struct CustomerQueryService {
    customers: Arc<dyn CustomerRepository>,
    categories: Arc<dyn CategoryRepository>,
    locations: Arc<dyn LocationRepository>,
}

impl CustomerQueryService {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        categories: Arc<dyn CategoryRepository>,
        locations: Arc<dyn LocationRepository>,
    ) -> Self {
        Self {
            customers,
            categories,
            locations,
        }
    }

    pub async fn list_customers(&self, query: ListCustomersQuery) -> ApplicationResult<Vec<CustomerDto>> {
        let filter = CustomerFilter {
            category_id: query.category.map(CategoryId),
            location_id: query.location.map(LocationId),
            search: non_blank(query.q),
        };
        let customers = self.customers.list(&filter).await?;
        if customers.is_empty() {
            return Ok(Vec::new());
        }

        let categories: HashMap<CategoryId, CategoryDto> = self
            .categories
            .list()
            .await?
            .into_iter()
            .map(|category| (category.id, category.into()))
            .collect();
        let locations: HashMap<LocationId, LocationDto> = self
            .locations
            .list()
            .await?
            .into_iter()
            .map(|location| (location.id, location.into()))
            .collect();

        Ok(customers
            .into_iter()
            .map(|customer| {
                let category = categories.get(&customer.category_id).cloned();
                let location = locations.get(&customer.location_id).cloned();
                CustomerDto::from_parts(customer, category, location)
            })
            .collect())
    }

    pub async fn get_customer(&self, id: i64) -> ApplicationResult<CustomerDto> {
        let customer = self.find(id).await?;
        self.with_references(customer).await
    }

    pub async fn get_customer_by_slug(&self, slug: String) -> ApplicationResult<CustomerDto> {
        let not_found = || ApplicationError::not_found("customer not found");
        let slug = Slug::new(slug).map_err(|_| not_found())?;
        let customer = self
            .customers
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;
        self.with_references(customer).await
    }

    /// Every shop photo, or one slider group of them when `group` is given.
    pub async fn customer_photos(
        &self,
        id: i64,
        group: Option<&str>,
    ) -> ApplicationResult<Vec<String>> {
        let customer = self.find(id).await?;
        let photos = customer.photos.shop_photos;
        match group.filter(|raw| !raw.is_empty()) {
            None => Ok(photos),
            Some(raw) => Ok(PhotoGroup::parse(raw)?.select(&photos)),
        }
    }

    async fn find(&self, id: i64) -> ApplicationResult<Customer> {
        let not_found = || ApplicationError::not_found("customer not found");
        let id = CustomerId::new(id).map_err(|_| not_found())?;
        self.customers.find_by_id(id).await?.ok_or_else(not_found)
    }

    async fn with_references(&self, customer: Customer) -> ApplicationResult<CustomerDto> {
        let category = self.categories.find_by_id(customer.category_id).await?;
        let location = self.locations.find_by_id(customer.location_id).await?;
        Ok(CustomerDto::from_parts(
            customer,
            category.map(Into::into),
            location.map(Into::into),
        ))
    }
}
