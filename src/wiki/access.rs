use glob_match::glob_match;
use log::debug;

/// Decides whether a page may appear in a table of contents
pub trait AccessControl: Send + Sync {
    fn can_view(&self, page: &str) -> bool;
}

/// Every page is visible
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessControl for AllowAll {
    fn can_view(&self, _page: &str) -> bool {
        true
    }
}

/// Hides pages matching any of a set of glob patterns
#[derive(Debug, Clone, Default)]
pub struct DenyList {
    patterns: Vec<String>,
}

impl DenyList {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }
}

impl AccessControl for DenyList {
    fn can_view(&self, page: &str) -> bool {
        match self.patterns.iter().find(|pattern| glob_match(pattern, page)) {
            Some(pattern) => {
                debug!("Page '{}' denied by pattern '{}'", page, pattern);
                false
            }
            None => true,
        }
    }
}
