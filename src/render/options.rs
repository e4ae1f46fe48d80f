use serde::{Deserialize, Serialize};

use crate::toc::MAX_DEPTH;

const DEFAULT_HEADING: &str = "Table of Contents";
const INDEX_HEADING: &str = "Page Index";

/// What to put in a table of contents and how to present it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocOptions {
    /// Page names; a trailing `*` expands to all pages with that prefix
    pub pages: Vec<String>,
    /// Heading above the list, overriding the default one
    pub heading: Option<String>,
    /// Suppress the default heading
    pub no_heading: bool,
    /// Deepest heading level shown
    pub depth: Option<usize>,
    /// Inline with the text instead of a side bar
    pub inline: bool,
    /// One entry per page instead of the page outlines
    pub title_index: bool,
    /// Title index of the pages below a section of the wiki
    pub section_index: bool,
    /// Leave out page titles (level 1 headings)
    pub no_title: bool,
    /// Expand wildcards in reverse order
    pub reverse: bool,
    /// Page whose lines name further pages to include
    pub from: Option<String>,
    /// Unnumbered lists
    pub no_numbering: bool,
    /// Render nothing at all
    pub no_float: bool,
}

impl TocOptions {
    pub fn for_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// A section index is a title index too
    pub fn is_title_index(&self) -> bool {
        self.title_index || self.section_index
    }

    /// The heading shown above the list, if any
    pub fn effective_heading(&self) -> Option<String> {
        if let Some(heading) = self.heading.as_deref().filter(|h| !h.is_empty()) {
            return Some(heading.to_string());
        }

        if self.no_heading {
            None
        } else if self.is_title_index() {
            Some(INDEX_HEADING.to_string())
        } else {
            Some(DEFAULT_HEADING.to_string())
        }
    }

    /// Shallowest heading level shown
    pub fn min_depth(&self) -> usize {
        if self.no_title {
            2
        } else {
            1
        }
    }

    pub fn max_depth(&self) -> usize {
        self.depth.unwrap_or(MAX_DEPTH)
    }
}

/// The page being viewed when a table of contents is rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub current_page: String,
    /// Text of the current page, used instead of the store when present
    pub current_source: Option<String>,
    /// Path of the current request; links into this page keep only the anchor
    pub request_path: String,
}

impl RenderContext {
    pub fn new(current_page: impl Into<String>, request_path: impl Into<String>) -> Self {
        Self {
            current_page: current_page.into(),
            current_source: None,
            request_path: request_path.into(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.current_source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_heading() {
        assert_eq!(TocOptions::default().effective_heading().as_deref(), Some("Table of Contents"));
    }

    #[test]
    fn test_index_heading() {
        let options = TocOptions {
            section_index: true,
            ..TocOptions::default()
        };
        assert!(options.is_title_index());
        assert_eq!(options.effective_heading().as_deref(), Some("Page Index"));
    }

    #[test]
    fn test_explicit_heading_beats_no_heading() {
        let options = TocOptions {
            heading: Some("All pages".to_string()),
            no_heading: true,
            ..TocOptions::default()
        };
        assert_eq!(options.effective_heading().as_deref(), Some("All pages"));

        let options = TocOptions {
            no_heading: true,
            title_index: true,
            ..TocOptions::default()
        };
        assert_eq!(options.effective_heading(), None);
    }

    #[test]
    fn test_depth_window() {
        let options = TocOptions {
            no_title: true,
            depth: Some(3),
            ..TocOptions::default()
        };
        assert_eq!((options.min_depth(), options.max_depth()), (2, 3));
        assert_eq!(TocOptions::default().max_depth(), 6);
    }

    #[test]
    fn test_options_from_yaml() {
        let yaml = "pages: [TracGuide, 'Trac*']\ninline: true\ndepth: 2\n";
        let options: TocOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(options.pages, vec!["TracGuide", "Trac*"]);
        assert!(options.inline);
        assert_eq!(options.depth, Some(2));
        assert!(!options.reverse);
    }
}
