use crate::error::Result;
use globset::{Glob, GlobMatcher};

// ---------------------------------------------------------------------------
// ActionFilter
// ---------------------------------------------------------------------------

/// Shell-wildcard filter over action display names.
///
/// Standard glob semantics: `*`, `?`, and character classes, case-sensitive.
/// A pattern without wildcard characters only matches the exact name.
pub struct ActionFilter {
    matcher: GlobMatcher,
}

impl ActionFilter {
    pub fn new(pattern: &str) -> Result<Self> {
        let matcher = Glob::new(pattern)?.compile_matcher();
        Ok(Self { matcher })
    }

    pub fn matches(&self, display_name: &str) -> bool {
        self.matcher.is_match(display_name)
    }
}
