use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{category::CategoryRepository, slug::UniqueSlugService},
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) slugs: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        slugs: Arc<UniqueSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, slugs, clock }
    }
}
