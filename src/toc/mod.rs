mod html;
mod outline;
mod resolver;
mod types;

pub use html::{list_to_html, toc_to_html};
pub use outline::outline_tree;
pub use resolver::{page_url, url_path, LinkResolver, PageLinkResolver};
pub use types::{
    HeadingEntry, ItemContent, Link, List, ListItem, ListKind, ListNode, RenderParams, Toc,
    MAX_DEPTH,
};
