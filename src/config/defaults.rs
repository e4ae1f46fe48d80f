use std::path::PathBuf;

/// Default pages directory, relative to the source directory
pub fn default_pages_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Default base URL pages are served under
pub fn default_base_url() -> String {
    "/wiki".to_string()
}

/// Default page file extensions
pub fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "wiki".to_string(), "txt".to_string()]
}

/// Default deepest heading level
pub fn default_max_depth() -> usize {
    crate::toc::MAX_DEPTH
}
