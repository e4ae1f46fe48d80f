//! Table of contents rendering over a set of wiki pages.

mod options;
mod pagelist;

pub use options::{RenderContext, TocOptions};
pub use pagelist::{resolve_pages, PageList};

use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::toc::{
    self, HeadingEntry, ItemContent, Link, List, ListItem, ListKind, PageLinkResolver,
    RenderParams, Toc,
};
use crate::utils::error::{BoxResult, TocError};
use crate::wiki::{
    AccessControl, AllowAll, ContentStore, HeadingExtractor, PageCatalog, PageText,
    WikiHeadingExtractor,
};

const DEFAULT_BASE_URL: &str = "/wiki";

/// Settings shared by every page of one rendering
struct PagePass<'a> {
    options: &'a TocOptions,
    ctx: &'a RenderContext,
    min_depth: usize,
    max_depth: usize,
    /// More than one page is rendered, so the current one gets highlighted
    highlight_current: bool,
}

/// Renders tables of contents from the pages of a wiki
pub struct TocRenderer {
    store: Arc<dyn ContentStore>,
    catalog: Arc<dyn PageCatalog>,
    extractor: Arc<dyn HeadingExtractor>,
    access: Arc<dyn AccessControl>,
    base_url: String,
}

impl TocRenderer {
    /// A renderer over a wiki that both stores and lists its pages
    pub fn new<W>(wiki: Arc<W>) -> Self
    where
        W: ContentStore + PageCatalog + 'static,
    {
        let store: Arc<dyn ContentStore> = wiki.clone();
        let catalog: Arc<dyn PageCatalog> = wiki;
        Self {
            store,
            catalog,
            extractor: Arc::new(WikiHeadingExtractor::new()),
            access: Arc::new(AllowAll),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn PageCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn HeadingExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_access(mut self, access: Arc<dyn AccessControl>) -> Self {
        self.access = access;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL of a page of this wiki
    pub fn page_url(&self, page: &str) -> String {
        toc::page_url(&self.base_url, page)
    }

    /// Text of a page; the current page comes from the context when it has it
    pub fn page_text(&self, page: &str, ctx: &RenderContext) -> BoxResult<PageText> {
        match &ctx.current_source {
            Some(source) if page == ctx.current_page => Ok(PageText::found(source.clone())),
            _ => self.store.page_text(page),
        }
    }

    /// The flat outline of a page, `None` when the page does not exist
    pub fn outline(&self, page: &str, ctx: &RenderContext) -> BoxResult<Option<Vec<HeadingEntry>>> {
        let page_text = self.page_text(page, ctx)?;
        if !page_text.exists {
            return Ok(None);
        }
        Ok(Some(self.extractor.outline(&page_text.text)))
    }

    /// Pages the options select, in display order
    pub fn resolve_pages(&self, options: &TocOptions, ctx: &RenderContext) -> BoxResult<PageList> {
        resolve_pages(options, ctx, self.catalog.as_ref(), |page| self.page_text(page, ctx))
    }

    /// Render a table of contents.
    ///
    /// Returns `None` when the options ask for nothing to be shown. Pages are
    /// rendered in parallel and concatenated in page order.
    pub fn render(&self, options: &TocOptions, ctx: &RenderContext) -> BoxResult<Option<Toc>> {
        if options.no_float {
            debug!("Table of contents suppressed");
            return Ok(None);
        }

        let pages = self.resolve_pages(options, ctx)?;
        let pass = PagePass {
            options,
            ctx,
            min_depth: if pages.implicit_current { 2 } else { options.min_depth() },
            max_depth: options.max_depth(),
            highlight_current: pages.names.len() > 1,
        };

        // Boxed errors are not Send, so they cross the thread pool as text.
        let sections: Vec<Result<Option<Vec<ListItem>>, String>> = pages
            .names
            .par_iter()
            .map(|page| self.render_page(page, &pass).map_err(|e| e.to_string()))
            .collect();

        let mut list = List::new(ListKind::for_numbering(options.no_numbering));
        let mut rendered = Vec::new();
        for (page, section) in pages.names.iter().zip(sections) {
            if let Some(items) = section.map_err(TocError::Page)? {
                rendered.push(page.clone());
                list.items.extend(items);
            }
        }

        info!(
            "Rendered table of contents for {} page(s), {} entries",
            rendered.len(),
            list.link_count()
        );

        Ok(Some(Toc {
            inline: options.inline,
            heading: options.effective_heading(),
            pages: rendered,
            list,
        }))
    }

    /// Items for one page, `None` when the page is not shown at all
    fn render_page(&self, page: &str, pass: &PagePass<'_>) -> BoxResult<Option<Vec<ListItem>>> {
        if page != pass.ctx.current_page && !self.access.can_view(page) {
            debug!("Leaving out page '{}': no access", page);
            return Ok(None);
        }

        let active = pass.highlight_current && page == pass.ctx.current_page;
        let items = if pass.options.is_title_index() {
            self.render_title_entry(page, pass, active)?
        } else {
            self.render_page_outline(page, pass, active)?
        };
        Ok(Some(items))
    }

    fn render_title_entry(
        &self,
        page: &str,
        pass: &PagePass<'_>,
        active: bool,
    ) -> BoxResult<Vec<ListItem>> {
        let Some(outline) = self.outline(page, pass.ctx)? else {
            return Ok(vec![ListItem::message(format!("Error: No page matching {} found", page))]);
        };

        let title = if pass.min_depth < 2 {
            outline.first().map(|entry| entry.heading.clone())
        } else {
            None
        };

        let mut item = ListItem::new(ItemContent::Page {
            link: Link {
                label: page.to_string(),
                href: self.page_url(page),
            },
            title,
        });
        item.active = active;
        Ok(vec![item])
    }

    fn render_page_outline(
        &self,
        page: &str,
        pass: &PagePass<'_>,
        active: bool,
    ) -> BoxResult<Vec<ListItem>> {
        let Some(outline) = self.outline(page, pass.ctx)? else {
            return Ok(vec![ListItem::message(format!("Error: Page {} does not exist", page))]);
        };

        let params = RenderParams {
            min_depth: pass.min_depth,
            max_depth: pass.max_depth,
            no_numbering: pass.options.no_numbering,
            active,
        };
        let resolver = PageLinkResolver::new(self.page_url(page), pass.ctx.request_path.clone());
        let tree = toc::outline_tree(&outline, &params, &resolver);
        debug!("Page '{}': {} headings, {} rendered", page, outline.len(), tree.link_count());
        Ok(tree.items)
    }
}
