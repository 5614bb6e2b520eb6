// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            auth::AuthCommandService, categories::CategoryCommandService,
            customers::CustomerCommandService, enquiries::EnquiryCommandService,
            join_requests::JoinRequestCommandService, locations::LocationCommandService,
            maintenance::MaintenanceCommandService,
        },
        dto::AuthenticatedAdmin,
        error::ApplicationResult,
        ports::{
            security::{PasswordHasher, TokenManager},
            storage::FileStore,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            categories::CategoryQueryService, customers::CustomerQueryService,
            enquiries::EnquiryQueryService, join_requests::JoinRequestQueryService,
            locations::LocationQueryService,
        },
    },
    domain::{
        admin::AdminRepository,
        category::CategoryRepository,
        customer::CustomerRepository,
        enquiry::EnquiryRepository,
        join_request::JoinRequestRepository,
        location::LocationRepository,
        slug::{SlugBackfillService, SlugRepository, UniqueSlugService},
    },
};

/// Repository implementations the services are wired against. The slug views
/// are usually the same objects as the entity repositories.
pub struct RepositorySet {
    pub admins: Arc<dyn AdminRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub category_slugs: Arc<dyn SlugRepository>,
    pub locations: Arc<dyn LocationRepository>,
    pub location_slugs: Arc<dyn SlugRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub customer_slugs: Arc<dyn SlugRepository>,
    pub enquiries: Arc<dyn EnquiryRepository>,
    pub join_requests: Arc<dyn JoinRequestRepository>,
}

pub struct PortSet {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub file_store: Arc<dyn FileStore>,
}

pub struct ApplicationServices {
    pub auth_commands: Arc<AuthCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub location_commands: Arc<LocationCommandService>,
    pub location_queries: Arc<LocationQueryService>,
    pub customer_commands: Arc<CustomerCommandService>,
    pub customer_queries: Arc<CustomerQueryService>,
    pub enquiry_commands: Arc<EnquiryCommandService>,
    pub enquiry_queries: Arc<EnquiryQueryService>,
    pub join_request_commands: Arc<JoinRequestCommandService>,
    pub join_request_queries: Arc<JoinRequestQueryService>,
    pub maintenance_commands: Arc<MaintenanceCommandService>,
    pub slug_backfill: Arc<SlugBackfillService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(repos: RepositorySet, ports: PortSet) -> Self {
        let slug_service = |repo: &Arc<dyn SlugRepository>| {
            Arc::new(UniqueSlugService::new(
                Arc::clone(repo),
                Arc::clone(&ports.slugger),
            ))
        };
        let customer_slugs = slug_service(&repos.customer_slugs);
        let category_slugs = slug_service(&repos.category_slugs);
        let location_slugs = slug_service(&repos.location_slugs);

        let slug_backfill = Arc::new(SlugBackfillService::new(vec![
            Arc::clone(&customer_slugs),
            Arc::clone(&category_slugs),
            Arc::clone(&location_slugs),
        ]));

        let auth_commands = Arc::new(AuthCommandService::new(
            Arc::clone(&repos.admins),
            Arc::clone(&ports.password_hasher),
            Arc::clone(&ports.token_manager),
            Arc::clone(&ports.clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.categories),
            category_slugs,
            Arc::clone(&ports.clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&repos.categories)));

        let location_commands = Arc::new(LocationCommandService::new(
            Arc::clone(&repos.locations),
            location_slugs,
            Arc::clone(&ports.clock),
        ));
        let location_queries = Arc::new(LocationQueryService::new(
            Arc::clone(&repos.locations),
            Arc::clone(&repos.categories),
        ));

        let customer_commands = Arc::new(CustomerCommandService::new(
            Arc::clone(&repos.customers),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.locations),
            customer_slugs,
            Arc::clone(&ports.file_store),
            Arc::clone(&ports.clock),
        ));
        let customer_queries = Arc::new(CustomerQueryService::new(
            Arc::clone(&repos.customers),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.locations),
        ));

        let enquiry_commands = Arc::new(EnquiryCommandService::new(
            Arc::clone(&repos.enquiries),
            Arc::clone(&repos.customers),
            Arc::clone(&ports.clock),
        ));
        let enquiry_queries = Arc::new(EnquiryQueryService::new(
            Arc::clone(&repos.enquiries),
            Arc::clone(&repos.customers),
        ));

        let join_request_commands = Arc::new(JoinRequestCommandService::new(
            Arc::clone(&repos.join_requests),
            Arc::clone(&ports.clock),
        ));
        let join_request_queries =
            Arc::new(JoinRequestQueryService::new(Arc::clone(&repos.join_requests)));

        let maintenance_commands =
            Arc::new(MaintenanceCommandService::new(Arc::clone(&slug_backfill)));

        Self {
            auth_commands,
            category_commands,
            category_queries,
            location_commands,
            location_queries,
            customer_commands,
            customer_queries,
            enquiry_commands,
            enquiry_queries,
            join_request_commands,
            join_request_queries,
            maintenance_commands,
            slug_backfill,
            token_manager: ports.token_manager,
        }
    }

    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAdmin> {
        self.token_manager.authenticate(token).await
    }
}
