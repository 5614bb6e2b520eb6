use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{location::LocationRepository, slug::UniqueSlugService},
};

pub struct LocationCommandService {
    pub(super) repo: Arc<dyn LocationRepository>,
    pub(super) slugs: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl LocationCommandService {
    pub fn new(
        repo: Arc<dyn LocationRepository>,
        slugs: Arc<UniqueSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, slugs, clock }
    }
}
