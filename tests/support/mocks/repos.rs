// tests/support/mocks/repos.rs
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shop_directory::domain::{
    admin::{Admin, AdminId, AdminRepository, NewAdmin, PasswordHash, Username},
    category::{Category, CategoryId, CategoryName, CategoryRepository, CategoryUpdate, NewCategory},
    customer::{
        Customer, CustomerFilter, CustomerId, CustomerPhotos, CustomerProfile, CustomerRepository,
        CustomerUpdate, NewCustomer, ShopName,
    },
    enquiry::{Enquiry, EnquiryId, EnquiryRepository, NewEnquiry},
    errors::{DomainError, DomainResult},
    join_request::{JoinRequest, JoinRequestId, JoinRequestRepository, NewJoinRequest},
    location::{Location, LocationId, LocationName, LocationRepository, LocationUpdate, NewLocation},
    slug::{MissingSlug, Slug, SlugRepository, SlugScope},
};

use super::time::fixed_now;

#[derive(Default)]
struct State {
    next_id: i64,
    admins: Vec<Admin>,
    categories: BTreeMap<i64, Category>,
    locations: BTreeMap<i64, Location>,
    customers: BTreeMap<i64, Customer>,
    enquiries: Vec<Enquiry>,
    join_requests: Vec<JoinRequest>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn slug_taken(&self, scope: SlugScope, slug: &Slug, exclude: Option<i64>) -> bool {
        let holds = |id: i64, value: Option<&Slug>| Some(id) != exclude && value == Some(slug);
        match scope {
            SlugScope::Category => self
                .categories
                .values()
                .any(|c| holds(c.id.0, c.slug.as_ref())),
            SlugScope::Location => self
                .locations
                .values()
                .any(|l| holds(l.id.0, l.slug.as_ref())),
            SlugScope::Shop => self
                .customers
                .values()
                .any(|c| holds(c.id.0, c.slug.as_ref())),
        }
    }
}

#[derive(Default)]
struct Faults {
    /// Slug writes that fail with a conflict regardless of the store contents.
    slug_conflicts: HashMap<SlugScope, usize>,
    failing_assigns: HashSet<(SlugScope, i64)>,
    failing_scans: HashSet<SlugScope>,
    failing_lookups: HashSet<SlugScope>,
    /// Slug committed to a shop right after its next `find_by_id`, standing in
    /// for a backfill that lands between an update's read and its write.
    shop_slug_after_read: Option<(i64, String)>,
}

/// Shared in-memory store behind every repository double. Enforces the same
/// name and slug uniqueness and reference rules as the database schema.
#[derive(Default)]
pub struct InMemoryDirectory {
    state: Mutex<State>,
    faults: Mutex<Faults>,
    slug_writes: Mutex<HashMap<SlugScope, usize>>,
}

impl InMemoryDirectory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn categories(self: &Arc<Self>) -> Arc<CategoryStore> {
        Arc::new(CategoryStore(Arc::clone(self)))
    }

    pub fn locations(self: &Arc<Self>) -> Arc<LocationStore> {
        Arc::new(LocationStore(Arc::clone(self)))
    }

    pub fn customers(self: &Arc<Self>) -> Arc<CustomerStore> {
        Arc::new(CustomerStore(Arc::clone(self)))
    }

    /// The next `count` slug writes in `scope` report a conflict.
    pub fn inject_slug_conflicts(&self, scope: SlugScope, count: usize) {
        self.faults
            .lock()
            .unwrap()
            .slug_conflicts
            .insert(scope, count);
    }

    pub fn fail_assign(&self, scope: SlugScope, id: i64) {
        self.faults
            .lock()
            .unwrap()
            .failing_assigns
            .insert((scope, id));
    }

    pub fn fail_scan(&self, scope: SlugScope) {
        self.faults.lock().unwrap().failing_scans.insert(scope);
    }

    /// Makes every slug existence check in `scope` fail.
    pub fn fail_slug_lookup(&self, scope: SlugScope) {
        self.faults.lock().unwrap().failing_lookups.insert(scope);
    }

    pub fn assign_shop_slug_after_next_read(&self, id: CustomerId, slug: &str) {
        self.faults.lock().unwrap().shop_slug_after_read = Some((id.0, slug.to_string()));
    }

    /// Slug-bearing writes attempted in `scope`, including rejected ones.
    pub fn slug_writes(&self, scope: SlugScope) -> usize {
        self.slug_writes
            .lock()
            .unwrap()
            .get(&scope)
            .copied()
            .unwrap_or(0)
    }

    fn begin_slug_write(&self, scope: SlugScope) -> DomainResult<()> {
        *self.slug_writes.lock().unwrap().entry(scope).or_default() += 1;
        let mut faults = self.faults.lock().unwrap();
        if let Some(remaining) = faults.slug_conflicts.get_mut(&scope) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(DomainError::SlugConflict(format!(
                    "{}_slug_key",
                    scope.collection()
                )));
            }
        }
        Ok(())
    }

    fn slug_conflict(scope: SlugScope) -> DomainError {
        DomainError::SlugConflict(format!("{}_slug_key", scope.collection()))
    }

    /* ------------------------------ seeding ------------------------------ */

    pub fn seed_admin(&self, username: &str, password_hash: &str) -> Admin {
        let mut state = self.state.lock().unwrap();
        let admin = Admin {
            id: AdminId(state.next_id()),
            username: Username::new(username).unwrap(),
            password_hash: PasswordHash::new(password_hash).unwrap(),
            created_at: fixed_now(),
        };
        state.admins.push(admin.clone());
        admin
    }

    pub fn seed_category(&self, name: &str, slug: Option<&str>) -> Category {
        let mut state = self.state.lock().unwrap();
        let category = Category {
            id: CategoryId(state.next_id()),
            name: CategoryName::new(name).unwrap(),
            slug: slug.map(|s| Slug::new(s).unwrap()),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        };
        state.categories.insert(category.id.0, category.clone());
        category
    }

    pub fn seed_location(&self, name: &str, slug: Option<&str>) -> Location {
        let mut state = self.state.lock().unwrap();
        let location = Location {
            id: LocationId(state.next_id()),
            name: LocationName::new(name).unwrap(),
            slug: slug.map(|s| Slug::new(s).unwrap()),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        };
        state.locations.insert(location.id.0, location.clone());
        location
    }

    pub fn seed_customer(
        &self,
        shop_name: &str,
        slug: Option<&str>,
        category: CategoryId,
        location: LocationId,
    ) -> Customer {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let customer = Customer {
            id: CustomerId(id),
            shop_name: ShopName::new(shop_name).unwrap(),
            slug: slug.map(|s| Slug::new(s).unwrap()),
            profile: CustomerProfile::default(),
            photos: CustomerPhotos::default(),
            category_id: category,
            location_id: location,
            joined_at: None,
            created_at: fixed_now() + chrono::Duration::seconds(id),
            updated_at: fixed_now(),
        };
        state.customers.insert(id, customer.clone());
        customer
    }

    pub fn set_customer_photos(&self, id: CustomerId, photos: Vec<&str>) {
        let mut state = self.state.lock().unwrap();
        if let Some(customer) = state.customers.get_mut(&id.0) {
            customer.photos.shop_photos = photos.into_iter().map(String::from).collect();
        }
    }

    /* ----------------------------- inspection ----------------------------- */

    pub fn category(&self, id: CategoryId) -> Option<Category> {
        self.state.lock().unwrap().categories.get(&id.0).cloned()
    }

    pub fn location(&self, id: LocationId) -> Option<Location> {
        self.state.lock().unwrap().locations.get(&id.0).cloned()
    }

    pub fn customer(&self, id: CustomerId) -> Option<Customer> {
        self.state.lock().unwrap().customers.get(&id.0).cloned()
    }

    pub fn enquiry_count(&self) -> usize {
        self.state.lock().unwrap().enquiries.len()
    }

    fn scan(&self, scope: SlugScope) -> DomainResult<Vec<MissingSlug>> {
        if self.faults.lock().unwrap().failing_scans.contains(&scope) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let state = self.state.lock().unwrap();
        let missing = match scope {
            SlugScope::Category => state
                .categories
                .values()
                .filter(|c| c.slug.is_none())
                .map(|c| MissingSlug {
                    id: c.id.0,
                    source_text: Some(c.name.to_string()),
                })
                .collect(),
            SlugScope::Location => state
                .locations
                .values()
                .filter(|l| l.slug.is_none())
                .map(|l| MissingSlug {
                    id: l.id.0,
                    source_text: Some(l.name.to_string()),
                })
                .collect(),
            SlugScope::Shop => state
                .customers
                .values()
                .filter(|c| c.slug.is_none())
                .map(|c| MissingSlug {
                    id: c.id.0,
                    source_text: Some(c.shop_name.to_string()),
                })
                .collect(),
        };
        Ok(missing)
    }

    fn assign(&self, scope: SlugScope, id: i64, slug: &Slug) -> DomainResult<()> {
        if self
            .faults
            .lock()
            .unwrap()
            .failing_assigns
            .contains(&(scope, id))
        {
            return Err(DomainError::Persistence(format!("write to {id} failed")));
        }
        self.begin_slug_write(scope)?;
        let mut state = self.state.lock().unwrap();
        if state.slug_taken(scope, slug, Some(id)) {
            return Err(Self::slug_conflict(scope));
        }
        let target = match scope {
            SlugScope::Category => state.categories.get_mut(&id).map(|c| &mut c.slug),
            SlugScope::Location => state.locations.get_mut(&id).map(|l| &mut l.slug),
            SlugScope::Shop => state.customers.get_mut(&id).map(|c| &mut c.slug),
        };
        match target {
            Some(current) => {
                *current = Some(slug.clone());
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("{} {id} not found", scope))),
        }
    }

    fn exists(&self, scope: SlugScope, slug: &Slug, exclude: Option<i64>) -> DomainResult<bool> {
        if self.faults.lock().unwrap().failing_lookups.contains(&scope) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        Ok(self.state.lock().unwrap().slug_taken(scope, slug, exclude))
    }
}

/* ------------------------------ categories ------------------------------ */

pub struct CategoryStore(pub Arc<InMemoryDirectory>);

fn by_name<T>(items: &mut [T], name: impl Fn(&T) -> String) {
    items.sort_by_key(|item| name(item));
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        self.0.begin_slug_write(SlugScope::Category)?;
        let mut state = self.0.state.lock().unwrap();
        if state.categories.values().any(|c| c.name == category.name) {
            return Err(DomainError::Conflict("categories_name_key".into()));
        }
        if state.slug_taken(SlugScope::Category, &category.slug, None) {
            return Err(InMemoryDirectory::slug_conflict(SlugScope::Category));
        }
        let created = Category {
            id: CategoryId(state.next_id()),
            name: category.name,
            slug: Some(category.slug),
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        state.categories.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        self.0.begin_slug_write(SlugScope::Category)?;
        let mut state = self.0.state.lock().unwrap();
        if state.slug_taken(SlugScope::Category, &update.slug, Some(update.id.0)) {
            return Err(InMemoryDirectory::slug_conflict(SlugScope::Category));
        }
        let category = state
            .categories
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        category.name = update.name;
        category.slug = Some(update.slug);
        category.updated_at = update.updated_at;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.0.state.lock().unwrap();
        if !state.categories.contains_key(&id.0) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        if state.customers.values().any(|c| c.category_id == id) {
            return Err(DomainError::Conflict(
                "category is still referenced by shops".into(),
            ));
        }
        state.categories.remove(&id.0);
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.0.category(id))
    }

    async fn find_by_name(
        &self,
        name: &CategoryName,
        exclude: Option<CategoryId>,
    ) -> DomainResult<Option<Category>> {
        let state = self.0.state.lock().unwrap();
        Ok(state
            .categories
            .values()
            .find(|c| &c.name == name && Some(c.id) != exclude)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let state = self.0.state.lock().unwrap();
        Ok(state
            .categories
            .values()
            .find(|c| c.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let state = self.0.state.lock().unwrap();
        let mut categories: Vec<Category> = state.categories.values().cloned().collect();
        by_name(&mut categories, |c| c.name.to_string());
        Ok(categories)
    }

    async fn list_in_use(&self) -> DomainResult<Vec<Category>> {
        let state = self.0.state.lock().unwrap();
        let used: HashSet<CategoryId> = state.customers.values().map(|c| c.category_id).collect();
        let mut categories: Vec<Category> = state
            .categories
            .values()
            .filter(|c| used.contains(&c.id))
            .cloned()
            .collect();
        by_name(&mut categories, |c| c.name.to_string());
        Ok(categories)
    }

    async fn list_by_location(&self, location: LocationId) -> DomainResult<Vec<Category>> {
        let state = self.0.state.lock().unwrap();
        let used: HashSet<CategoryId> = state
            .customers
            .values()
            .filter(|c| c.location_id == location)
            .map(|c| c.category_id)
            .collect();
        let mut categories: Vec<Category> = state
            .categories
            .values()
            .filter(|c| used.contains(&c.id))
            .cloned()
            .collect();
        by_name(&mut categories, |c| c.name.to_string());
        Ok(categories)
    }
}

#[async_trait]
impl SlugRepository for CategoryStore {
    fn scope(&self) -> SlugScope {
        SlugScope::Category
    }

    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        self.0.exists(SlugScope::Category, slug, exclude_id)
    }

    async fn find_missing_slugs(&self) -> DomainResult<Vec<MissingSlug>> {
        self.0.scan(SlugScope::Category)
    }

    async fn assign_slug(&self, id: i64, slug: &Slug) -> DomainResult<()> {
        self.0.assign(SlugScope::Category, id, slug)
    }
}

/* ------------------------------ locations ------------------------------- */

pub struct LocationStore(pub Arc<InMemoryDirectory>);

#[async_trait]
impl LocationRepository for LocationStore {
    async fn insert(&self, location: NewLocation) -> DomainResult<Location> {
        self.0.begin_slug_write(SlugScope::Location)?;
        let mut state = self.0.state.lock().unwrap();
        if state.locations.values().any(|l| l.name == location.name) {
            return Err(DomainError::Conflict("locations_name_key".into()));
        }
        if state.slug_taken(SlugScope::Location, &location.slug, None) {
            return Err(InMemoryDirectory::slug_conflict(SlugScope::Location));
        }
        let created = Location {
            id: LocationId(state.next_id()),
            name: location.name,
            slug: Some(location.slug),
            created_at: location.created_at,
            updated_at: location.created_at,
        };
        state.locations.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: LocationUpdate) -> DomainResult<Location> {
        self.0.begin_slug_write(SlugScope::Location)?;
        let mut state = self.0.state.lock().unwrap();
        if state.slug_taken(SlugScope::Location, &update.slug, Some(update.id.0)) {
            return Err(InMemoryDirectory::slug_conflict(SlugScope::Location));
        }
        let location = state
            .locations
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("location not found".into()))?;
        location.name = update.name;
        location.slug = Some(update.slug);
        location.updated_at = update.updated_at;
        Ok(location.clone())
    }

    async fn delete(&self, id: LocationId) -> DomainResult<()> {
        let mut state = self.0.state.lock().unwrap();
        if !state.locations.contains_key(&id.0) {
            return Err(DomainError::NotFound("location not found".into()));
        }
        if state.customers.values().any(|c| c.location_id == id) {
            return Err(DomainError::Conflict(
                "location is still referenced by shops".into(),
            ));
        }
        state.locations.remove(&id.0);
        Ok(())
    }

    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>> {
        Ok(self.0.location(id))
    }

    async fn find_by_name(
        &self,
        name: &LocationName,
        exclude: Option<LocationId>,
    ) -> DomainResult<Option<Location>> {
        let state = self.0.state.lock().unwrap();
        Ok(state
            .locations
            .values()
            .find(|l| &l.name == name && Some(l.id) != exclude)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Location>> {
        let state = self.0.state.lock().unwrap();
        Ok(state
            .locations
            .values()
            .find(|l| l.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Location>> {
        let state = self.0.state.lock().unwrap();
        let mut locations: Vec<Location> = state.locations.values().cloned().collect();
        by_name(&mut locations, |l| l.name.to_string());
        Ok(locations)
    }
}

#[async_trait]
impl SlugRepository for LocationStore {
    fn scope(&self) -> SlugScope {
        SlugScope::Location
    }

    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        self.0.exists(SlugScope::Location, slug, exclude_id)
    }

    async fn find_missing_slugs(&self) -> DomainResult<Vec<MissingSlug>> {
        self.0.scan(SlugScope::Location)
    }

    async fn assign_slug(&self, id: i64, slug: &Slug) -> DomainResult<()> {
        self.0.assign(SlugScope::Location, id, slug)
    }
}

/* ------------------------------ customers ------------------------------- */

pub struct CustomerStore(pub Arc<InMemoryDirectory>);

impl CustomerStore {
    fn check_references(state: &State, category: CategoryId, location: LocationId) -> DomainResult<()> {
        if !state.categories.contains_key(&category.0) || !state.locations.contains_key(&location.0) {
            return Err(DomainError::Validation("invalid category or location".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn insert(&self, customer: NewCustomer) -> DomainResult<Customer> {
        self.0.begin_slug_write(SlugScope::Shop)?;
        let mut state = self.0.state.lock().unwrap();
        Self::check_references(&state, customer.category_id, customer.location_id)?;
        if state.slug_taken(SlugScope::Shop, &customer.slug, None) {
            return Err(InMemoryDirectory::slug_conflict(SlugScope::Shop));
        }
        let created = Customer {
            id: CustomerId(state.next_id()),
            shop_name: customer.shop_name,
            slug: Some(customer.slug),
            profile: customer.profile,
            photos: customer.photos,
            category_id: customer.category_id,
            location_id: customer.location_id,
            joined_at: customer.joined_at,
            created_at: customer.created_at,
            updated_at: customer.created_at,
        };
        state.customers.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CustomerUpdate) -> DomainResult<Customer> {
        if update.slug.is_some() {
            self.0.begin_slug_write(SlugScope::Shop)?;
        }
        let mut state = self.0.state.lock().unwrap();
        let mut next = state
            .customers
            .get(&update.id.0)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("customer not found".into()))?;
        if let Some(slug) = &update.slug {
            if state.slug_taken(SlugScope::Shop, slug, Some(next.id.0)) {
                return Err(InMemoryDirectory::slug_conflict(SlugScope::Shop));
            }
        }
        next.apply(update);
        Self::check_references(&state, next.category_id, next.location_id)?;
        state.customers.insert(next.id.0, next.clone());
        Ok(next)
    }

    async fn delete(&self, id: CustomerId) -> DomainResult<()> {
        let mut state = self.0.state.lock().unwrap();
        state
            .customers
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("customer not found".into()))?;
        state.enquiries.retain(|e| e.shop_id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: CustomerId) -> DomainResult<Option<Customer>> {
        let snapshot = self.0.customer(id);
        let pending = {
            let mut faults = self.0.faults.lock().unwrap();
            let due = matches!(&faults.shop_slug_after_read, Some((target, _)) if *target == id.0);
            if due {
                faults.shop_slug_after_read.take()
            } else {
                None
            }
        };
        if let Some((target, slug)) = pending {
            self.0.assign(SlugScope::Shop, target, &Slug::new(slug)?)?;
        }
        Ok(snapshot)
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Customer>> {
        let state = self.0.state.lock().unwrap();
        Ok(state
            .customers
            .values()
            .find(|c| c.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn list(&self, filter: &CustomerFilter) -> DomainResult<Vec<Customer>> {
        let state = self.0.state.lock().unwrap();
        let needle = filter.search.as_deref().map(str::to_lowercase);
        let mut customers: Vec<Customer> = state
            .customers
            .values()
            .filter(|c| filter.category_id.is_none_or(|id| c.category_id == id))
            .filter(|c| filter.location_id.is_none_or(|id| c.location_id == id))
            .filter(|c| {
                needle
                    .as_deref()
                    .is_none_or(|n| c.shop_name.as_str().to_lowercase().contains(n))
            })
            .cloned()
            .collect();
        customers.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(customers)
    }
}

#[async_trait]
impl SlugRepository for CustomerStore {
    fn scope(&self) -> SlugScope {
        SlugScope::Shop
    }

    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        self.0.exists(SlugScope::Shop, slug, exclude_id)
    }

    async fn find_missing_slugs(&self) -> DomainResult<Vec<MissingSlug>> {
        self.0.scan(SlugScope::Shop)
    }

    async fn assign_slug(&self, id: i64, slug: &Slug) -> DomainResult<()> {
        self.0.assign(SlugScope::Shop, id, slug)
    }
}

/* ------------------------- admins, enquiries, joins ------------------------- */

#[async_trait]
impl AdminRepository for InMemoryDirectory {
    async fn insert(&self, admin: NewAdmin) -> DomainResult<Admin> {
        let mut state = self.state.lock().unwrap();
        if state.admins.iter().any(|a| a.username == admin.username) {
            return Err(DomainError::Conflict("admins_username_key".into()));
        }
        let created = Admin {
            id: AdminId(state.next_id()),
            username: admin.username,
            password_hash: admin.password_hash,
            created_at: admin.created_at,
        };
        state.admins.push(created.clone());
        Ok(created)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Admin>> {
        let state = self.state.lock().unwrap();
        Ok(state.admins.iter().find(|a| &a.username == username).cloned())
    }
}

#[async_trait]
impl EnquiryRepository for InMemoryDirectory {
    async fn insert(&self, enquiry: NewEnquiry) -> DomainResult<Enquiry> {
        let mut state = self.state.lock().unwrap();
        let created = Enquiry {
            id: EnquiryId(state.next_id()),
            shop_id: enquiry.shop_id,
            name: enquiry.name,
            phone: enquiry.phone,
            enquiry: enquiry.enquiry,
            referred_by: enquiry.referred_by,
            created_at: enquiry.created_at,
        };
        state.enquiries.push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> DomainResult<Vec<Enquiry>> {
        let state = self.state.lock().unwrap();
        Ok(state.enquiries.iter().rev().cloned().collect())
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let mut state = self.state.lock().unwrap();
        let deleted = state.enquiries.len() as u64;
        state.enquiries.clear();
        Ok(deleted)
    }
}

#[async_trait]
impl JoinRequestRepository for InMemoryDirectory {
    async fn insert(&self, request: NewJoinRequest) -> DomainResult<JoinRequest> {
        let mut state = self.state.lock().unwrap();
        let created = JoinRequest {
            id: JoinRequestId(state.next_id()),
            shop_name: request.shop_name,
            owner_name: request.owner_name,
            phone: request.phone,
            email: request.email,
            category: request.category,
            location: request.location,
            message: request.message,
            created_at: request.created_at,
        };
        state.join_requests.push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> DomainResult<Vec<JoinRequest>> {
        let state = self.state.lock().unwrap();
        Ok(state.join_requests.iter().rev().cloned().collect())
    }

    async fn delete(&self, id: JoinRequestId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.join_requests.len();
        state.join_requests.retain(|r| r.id != id);
        if state.join_requests.len() == before {
            return Err(DomainError::NotFound("join request not found".into()));
        }
        Ok(())
    }
}
