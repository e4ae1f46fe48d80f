use crate::cli::commands::{build_renderer, write_output};
use crate::config::Config;
use crate::render::RenderContext;
use crate::toc::{url_path, HeadingEntry};
use crate::utils::error::{BoxResult, TocError};

/// Handle the outline command
pub fn handle_outline_command(page: &str, config: &Config) -> BoxResult<()> {
    let renderer = build_renderer(config);
    let ctx = RenderContext::new(page, url_path(&renderer.page_url(page)));

    let outline = renderer
        .outline(page, &ctx)?
        .ok_or_else(|| TocError::Page(format!("Page {} does not exist", page)))?;

    write_output(None, &format_outline(&outline))
}

/// One `depth<TAB>anchor<TAB>heading` line per entry
fn format_outline(outline: &[HeadingEntry]) -> String {
    outline
        .iter()
        .map(|entry| format!("{}\t{}\t{}", entry.depth, entry.anchor, entry.heading))
        .collect::<Vec<_>>()
        .join("\n")
}
