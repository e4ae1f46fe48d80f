use log::info;

use crate::cli::commands::{build_renderer, write_output};
use crate::cli::types::{OutputFormat, RenderArgs};
use crate::config::Config;
use crate::layout::{layout_globals, LayoutRenderer};
use crate::render::RenderContext;
use crate::toc::{toc_to_html, url_path};
use crate::utils::error::BoxResult;

/// Handle the render command
pub fn handle_render_command(args: &RenderArgs, config: &Config) -> BoxResult<()> {
    let renderer = build_renderer(config);
    let options = args.to_options(config);

    let request_path = url_path(&renderer.page_url(&args.current)).to_string();
    let ctx = RenderContext::new(args.current.clone(), request_path);

    let Some(toc) = renderer.render(&options, &ctx)? else {
        info!("Table of contents suppressed, nothing to write");
        return Ok(());
    };

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&toc)?,
        OutputFormat::Html => {
            let html = toc_to_html(&toc);
            match args.layout.clone().or_else(|| config.layout_path()) {
                Some(layout) => {
                    let globals = layout_globals(toc.heading.as_deref(), &toc.pages, &args.current);
                    LayoutRenderer::new()?.render_file(&layout, &html, &globals)?
                }
                None => html,
            }
        }
    };

    write_output(args.output.as_deref(), &output)
}
