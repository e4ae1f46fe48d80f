use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::utils::error::BoxResult;
use crate::utils::fs;
use crate::wiki::catalog::PageCatalog;

/// Raw text of a page, plus whether the page exists at all
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageText {
    pub text: String,
    pub exists: bool,
}

impl PageText {
    pub fn found(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exists: true,
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }
}

/// Source of page text
pub trait ContentStore: Send + Sync {
    /// Fetch a page by name. A page that does not exist is not an error.
    fn page_text(&self, page: &str) -> BoxResult<PageText>;
}

/// Pages stored as files below a directory.
///
/// Page `Guide/Install` maps to `<root>/Guide/Install.<ext>` for the first
/// configured extension that exists.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FsContentStore {
    pub fn new<P: AsRef<Path>>(root: P, extensions: Vec<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions,
        }
    }

    /// Locate the file backing a page, if any
    fn page_path(&self, page: &str) -> Option<PathBuf> {
        if !is_valid_page_name(page) {
            return None;
        }

        self.extensions
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", page, ext)))
            .find(|path| fs::is_file(path))
    }

    /// Page name for a file below the root, when its extension is served
    fn page_name(&self, path: &Path) -> Option<String> {
        let ext = path.extension()?.to_str()?;
        if !self.extensions.iter().any(|e| e == ext) {
            return None;
        }

        let relative = path.strip_prefix(&self.root).ok()?.with_extension("");
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Some(name)
    }
}

impl ContentStore for FsContentStore {
    fn page_text(&self, page: &str) -> BoxResult<PageText> {
        match self.page_path(page) {
            Some(path) => {
                debug!("Reading page '{}' from {}", page, path.display());
                Ok(PageText::found(fs::read_file(&path)?))
            }
            None => {
                debug!("Page '{}' not found below {}", page, self.root.display());
                Ok(PageText::missing())
            }
        }
    }
}

impl PageCatalog for FsContentStore {
    fn pages(&self, prefix: &str) -> BoxResult<Vec<String>> {
        let mut names = BTreeSet::new();

        let walker = WalkDir::new(&self.root).follow_links(true).into_iter();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry below {}: {}", self.root.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(name) = self.page_name(entry.path()) {
                if name.starts_with(prefix) {
                    names.insert(name);
                }
            }
        }

        Ok(names.into_iter().collect())
    }
}

/// In-memory pages, keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pages: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.pages.insert(name.into(), text.into());
    }
}

impl ContentStore for MemoryStore {
    fn page_text(&self, page: &str) -> BoxResult<PageText> {
        Ok(self
            .pages
            .get(page)
            .map(|text| PageText::found(text.clone()))
            .unwrap_or_else(PageText::missing))
    }
}

impl PageCatalog for MemoryStore {
    fn pages(&self, prefix: &str) -> BoxResult<Vec<String>> {
        Ok(self
            .pages
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect())
    }
}

/// Page names are relative, slash separated and never leave the root
fn is_valid_page_name(page: &str) -> bool {
    if page.is_empty() || page.starts_with('/') || page.contains('\\') {
        return false;
    }

    Path::new(page)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn extensions() -> Vec<String> {
        vec!["md".to_string(), "wiki".to_string()]
    }

    fn sample_store() -> (tempfile::TempDir, FsContentStore) {
        let dir = tempdir().unwrap();
        fs::write_file(dir.path().join("WikiStart.wiki"), "= Welcome =").unwrap();
        fs::write_file(dir.path().join("Guide.md"), "# Guide").unwrap();
        fs::write_file(dir.path().join("Guide/Install.md"), "# Install").unwrap();
        fs::write_file(dir.path().join("Guide/Upgrade.md"), "# Upgrade").unwrap();
        fs::write_file(dir.path().join("notes.txt"), "not a page").unwrap();
        let store = FsContentStore::new(dir.path(), extensions());
        (dir, store)
    }

    #[test]
    fn test_fs_page_text() {
        let (_dir, store) = sample_store();

        let page = store.page_text("Guide/Install").unwrap();
        assert!(page.exists);
        assert_eq!(page.text, "# Install");

        let wiki = store.page_text("WikiStart").unwrap();
        assert_eq!(wiki.text, "= Welcome =");

        assert_eq!(store.page_text("Missing").unwrap(), PageText::missing());
        assert!(!store.page_text("notes").unwrap().exists);
    }

    #[test]
    fn test_fs_rejects_escaping_names() {
        let (_dir, store) = sample_store();
        assert!(!store.page_text("../Guide").unwrap().exists);
        assert!(!store.page_text("/etc/passwd").unwrap().exists);
        assert!(!store.page_text("").unwrap().exists);
    }

    #[test]
    fn test_fs_catalog_prefix() {
        let (_dir, store) = sample_store();

        assert_eq!(
            store.pages("").unwrap(),
            vec!["Guide", "Guide/Install", "Guide/Upgrade", "WikiStart"]
        );
        assert_eq!(store.pages("Guide/").unwrap(), vec!["Guide/Install", "Guide/Upgrade"]);
        assert!(store.pages("Nothing").unwrap().is_empty());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new()
            .with_page("B", "two")
            .with_page("A", "one")
            .with_page("A/Child", "three");

        assert_eq!(store.page_text("A").unwrap(), PageText::found("one"));
        assert!(!store.page_text("C").unwrap().exists);
        assert_eq!(store.pages("A").unwrap(), vec!["A", "A/Child"]);
    }
}
