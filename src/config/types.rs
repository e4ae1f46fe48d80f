use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// wikitoc configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Source directory the configuration was loaded from
    #[serde(skip)]
    pub source: PathBuf,

    /// Directory holding the page files, relative to the source directory
    #[serde(default = "defaults::default_pages_dir")]
    pub pages_dir: PathBuf,

    /// URL prefix of page links
    #[serde(default = "defaults::default_base_url", alias = "baseurl")]
    pub base_url: String,

    /// File extensions of page files, in lookup order
    #[serde(default = "defaults::default_extensions")]
    pub extensions: Vec<String>,

    /// Heading used instead of "Table of Contents"
    #[serde(default)]
    pub heading: Option<String>,

    /// Unnumbered lists by default
    #[serde(default)]
    pub no_numbering: bool,

    /// Inline tables of contents by default
    #[serde(default)]
    pub inline: bool,

    /// Deepest heading level shown by default
    #[serde(default = "defaults::default_max_depth")]
    pub max_depth: usize,

    /// Glob patterns of pages never listed
    #[serde(default)]
    pub deny: Vec<String>,

    /// Liquid layout wrapping rendered HTML
    #[serde(default)]
    pub layout: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: PathBuf::from("."),
            pages_dir: defaults::default_pages_dir(),
            base_url: defaults::default_base_url(),
            extensions: defaults::default_extensions(),
            heading: None,
            no_numbering: false,
            inline: false,
            max_depth: defaults::default_max_depth(),
            deny: Vec::new(),
            layout: None,
        }
    }
}

impl Config {
    /// Absolute-or-source-relative pages directory
    pub fn pages_path(&self) -> PathBuf {
        self.source.join(&self.pages_dir)
    }

    /// Layout path resolved against the source directory
    pub fn layout_path(&self) -> Option<PathBuf> {
        self.layout.as_ref().map(|layout| self.source.join(layout))
    }
}
