// src/domain/slug/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// `base-n`, the candidate probed after `n` collisions.
    pub fn with_suffix(base: &str, n: u64) -> DomainResult<Self> {
        Self::new(format!("{base}-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// The collection a slug is unique within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugScope {
    Shop,
    Category,
    Location,
}

impl SlugScope {
    /// Base word used when the source text is absent or normalizes to nothing.
    pub fn default_base(self) -> &'static str {
        match self {
            SlugScope::Shop => "shop",
            SlugScope::Category => "category",
            SlugScope::Location => "location",
        }
    }

    pub fn collection(self) -> &'static str {
        match self {
            SlugScope::Shop => "customers",
            SlugScope::Category => "categories",
            SlugScope::Location => "locations",
        }
    }
}

impl fmt::Display for SlugScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}
