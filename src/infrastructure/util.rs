use crate::application::ports::util::SlugGenerator;
use regex::Regex;
use std::sync::LazyLock;

/// Everything outside lowercase ASCII letters, digits, whitespace and hyphens.
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("Invalid regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));
static HYPHENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("Invalid regex"));

/// Lowercases, strips anything but `[a-z0-9]`, whitespace and `-`, then joins
/// words with single hyphens. Non-ASCII letters are dropped rather than
/// transliterated.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let stripped = DISALLOWED_RE.replace_all(lowered.trim(), "");
        let hyphenated = WHITESPACE_RE.replace_all(&stripped, "-");
        let collapsed = HYPHENS_RE.replace_all(&hyphenated, "-");
        collapsed.trim_matches('-').to_string()
    }
}
