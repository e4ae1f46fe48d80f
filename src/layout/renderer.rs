use std::path::Path;

use liquid::model::Value;
use liquid::{Object, Parser};
use log::debug;

use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs;

/// Wraps rendered tables of contents in Liquid layouts
pub struct LayoutRenderer {
    parser: Parser,
}

impl LayoutRenderer {
    pub fn new() -> BoxResult<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| TocError::Template(format!("Failed to create Liquid parser: {}", e)))?;

        Ok(LayoutRenderer { parser })
    }

    /// Render `content` inside the layout file at `layout_path`
    pub fn render_file(
        &self,
        layout_path: &Path,
        content: &str,
        globals: &Object,
    ) -> BoxResult<String> {
        if !fs::is_file(layout_path) {
            let msg = format!("Layout not found: {}", layout_path.display());
            return Err(TocError::Template(msg).into());
        }

        debug!("Using layout: {}", layout_path.display());
        let layout = fs::read_file(layout_path)?;
        self.render(&layout, content, globals)
            .map_err(|e| TocError::Template(format!("{}: {}", layout_path.display(), e)).into())
    }

    /// Render `content` inside a layout template given as text
    pub fn render(&self, layout: &str, content: &str, globals: &Object) -> BoxResult<String> {
        let template = self
            .parser
            .parse(layout)
            .map_err(|e| TocError::Template(format!("Failed to parse layout: {}", e)))?;

        let mut render_globals = globals.clone();
        render_globals.insert("content".into(), Value::scalar(content.to_string()));

        let rendered = template
            .render(&render_globals)
            .map_err(|e| TocError::Template(format!("Failed to render layout: {}", e)))?;

        Ok(rendered)
    }
}

/// Template globals describing one rendering
pub fn layout_globals(heading: Option<&str>, pages: &[String], current_page: &str) -> Object {
    let mut globals = Object::new();

    let heading = match heading {
        Some(heading) => Value::scalar(heading.to_string()),
        None => Value::Nil,
    };
    globals.insert("heading".into(), heading);

    let pages = pages.iter().map(|page| Value::scalar(page.clone())).collect();
    globals.insert("pages".into(), Value::Array(pages));
    globals.insert("current_page".into(), Value::scalar(current_page.to_string()));

    globals
}
