// src/application/ports/util.rs

/// Pure text-to-slug normalization. May return an empty string; callers
/// substitute their own fallback.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
