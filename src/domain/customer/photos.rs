use crate::domain::errors::{DomainError, DomainResult};

/// One of the three slider groups a shop's photo list is split into.
///
/// Group `n` holds the photos whose index `i` satisfies `i % 3 == n - 1`, so
/// the groups interleave rather than forming contiguous thirds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoGroup(u8);

impl PhotoGroup {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        match raw.trim().parse::<u8>() {
            Ok(group @ 1..=3) => Ok(Self(group)),
            _ => Err(DomainError::Validation("group must be 1, 2 or 3".into())),
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn select(self, photos: &[String]) -> Vec<String> {
        let remainder = usize::from(self.0 - 1);
        photos
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx % 3 == remainder)
            .map(|(_, photo)| photo.clone())
            .collect()
    }
}
