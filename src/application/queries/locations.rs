// src/application/queries/locations.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDto, LocationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryRepository,
        location::{LocationId, LocationRepository},
        slug::Slug,
    },
};

pub struct LocationQueryService {
    locations: Arc<dyn LocationRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl LocationQueryService {
    pub fn new(
        locations: Arc<dyn LocationRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            locations,
            categories,
        }
    }

    pub async fn list_locations(&self) -> ApplicationResult<Vec<LocationDto>> {
        let locations = self.locations.list().await?;
        Ok(locations.into_iter().map(Into::into).collect())
    }

    pub async fn get_location_by_slug(&self, slug: String) -> ApplicationResult<LocationDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("location not found"))?;
        self.locations
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("location not found"))
    }

    /// Categories of the shops listed in a location. Unknown locations have none.
    pub async fn categories_in_location(&self, id: i64) -> ApplicationResult<Vec<CategoryDto>> {
        let Ok(id) = LocationId::new(id) else {
            return Ok(Vec::new());
        };
        let categories = self.categories.list_by_location(id).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
