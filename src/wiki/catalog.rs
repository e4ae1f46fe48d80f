use crate::utils::error::BoxResult;

/// Lists the pages of a wiki
pub trait PageCatalog: Send + Sync {
    /// Names of all pages starting with `prefix`, in any order
    fn pages(&self, prefix: &str) -> BoxResult<Vec<String>>;

    /// Names starting with `prefix`, sorted ascending or descending
    fn sorted_pages(&self, prefix: &str, reverse: bool) -> BoxResult<Vec<String>> {
        let mut pages = self.pages(prefix)?;
        pages.sort();
        if reverse {
            pages.reverse();
        }
        Ok(pages)
    }
}
