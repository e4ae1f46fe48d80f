use log::debug;

use crate::render::options::{RenderContext, TocOptions};
use crate::utils::error::{BoxResult, TocError};
use crate::wiki::{PageCatalog, PageText};

/// The pages a table of contents covers, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageList {
    pub names: Vec<String>,
    /// No page was asked for, so the list is just the current page
    pub implicit_current: bool,
}

/// Work out which pages to render.
///
/// Named pages come first, then those listed on the `from` page. When that
/// leaves nothing, the current page (or for indexes, its section or the
/// whole wiki) is used. Names ending in `*` expand through the catalog.
pub fn resolve_pages<F>(
    options: &TocOptions,
    ctx: &RenderContext,
    catalog: &dyn PageCatalog,
    fetch: F,
) -> BoxResult<PageList>
where
    F: Fn(&str) -> BoxResult<PageText>,
{
    let mut names: Vec<String> = options
        .pages
        .iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if let Some(from) = options.from.as_deref() {
        names.extend(indirect_pages(from, &fetch)?);
    }

    let mut implicit_current = false;
    if names.is_empty() {
        if options.section_index {
            names.push(section_of(&ctx.current_page));
        } else if options.title_index {
            names.push("*".to_string());
        } else {
            names.push(ctx.current_page.clone());
            implicit_current = true;
        }
    }

    let mut expanded = Vec::new();
    for name in names {
        let name = if options.section_index {
            let name = if name == "/" { "*".to_string() } else { name };
            if name.ends_with('*') {
                name
            } else {
                format!("{}*", name)
            }
        } else {
            name
        };

        match name.strip_suffix('*') {
            Some(prefix) => {
                let matches = catalog.sorted_pages(prefix, options.reverse)?;
                debug!("Wildcard '{}' expanded to {} pages", name, matches.len());
                expanded.extend(matches);
            }
            None => expanded.push(name),
        }
    }

    Ok(PageList {
        names: expanded,
        implicit_current,
    })
}

/// Page names listed one per line on another page, `#` lines being comments
fn indirect_pages<F>(page: &str, fetch: &F) -> BoxResult<Vec<String>>
where
    F: Fn(&str) -> BoxResult<PageText>,
{
    let source = fetch(page)?;
    if !source.exists {
        return Err(TocError::IndirectPage(page.to_string()).into());
    }

    Ok(source
        .text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Wildcard for the pages sharing the current page's parent
fn section_of(page: &str) -> String {
    match page.rsplit_once('/') {
        Some((parent, _)) => format!("{}/", parent),
        None => "*".to_string(),
    }
}
