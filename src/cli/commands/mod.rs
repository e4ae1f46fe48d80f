mod outline;
mod pages;
mod render;

pub use outline::handle_outline_command;
pub use pages::handle_pages_command;
pub use render::handle_render_command;

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::render::TocRenderer;
use crate::utils::error::BoxResult;
use crate::utils::fs;
use crate::wiki::{DenyList, FsContentStore};

/// The page store described by the configuration
pub fn open_wiki(config: &Config) -> FsContentStore {
    let extensions = config
        .extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect();
    FsContentStore::new(config.pages_path(), extensions)
}

/// A renderer wired to the configured wiki, base URL and deny list
pub fn build_renderer(config: &Config) -> TocRenderer {
    let renderer =
        TocRenderer::new(Arc::new(open_wiki(config))).with_base_url(config.base_url.clone());

    if config.deny.is_empty() {
        renderer
    } else {
        renderer.with_access(Arc::new(DenyList::new(config.deny.clone())))
    }
}

/// Print to standard output, or write to a file when one is given
fn write_output(output: Option<&Path>, content: &str) -> BoxResult<()> {
    match output {
        Some(path) => {
            fs::write_file(path, content)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
