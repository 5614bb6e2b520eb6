// src/application/queries/categories.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{category::CategoryRepository, slug::Slug},
};

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Admins see every category; the public listing hides categories no
    /// shop belongs to.
    pub async fn list_categories(&self, include_unused: bool) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = if include_unused {
            self.repo.list().await?
        } else {
            self.repo.list_in_use().await?
        };
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category_by_slug(&self, slug: String) -> ApplicationResult<CategoryDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("category not found"))?;
        self.repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
