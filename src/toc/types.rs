use serde::{Deserialize, Serialize};

/// Deepest heading level any outline can carry (h1..h6)
pub const MAX_DEPTH: usize = 6;

/// One heading of a page outline, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Heading level, 1 for a page title
    pub depth: usize,
    /// Fragment identifier, unique within the page
    pub anchor: String,
    /// Display label, already safe markup
    pub heading: String,
}

impl HeadingEntry {
    pub fn new(depth: usize, anchor: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            depth,
            anchor: anchor.into(),
            heading: heading.into(),
        }
    }
}

/// Parameters for a single outline rendering call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderParams {
    pub min_depth: usize,
    pub max_depth: usize,
    /// Unnumbered lists instead of ordered ones at every level
    pub no_numbering: bool,
    /// Mark the page's top-level items as the page being viewed
    pub active: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            min_depth: 1,
            max_depth: MAX_DEPTH,
            no_numbering: false,
            active: false,
        }
    }
}

impl RenderParams {
    /// The effective inclusive depth window.
    ///
    /// Swapped bounds are put back in order first, then `max_depth` is capped
    /// at [`MAX_DEPTH`] and `min_depth` raised to 1. The result can still be
    /// empty (`min > max`) when both bounds lie beyond [`MAX_DEPTH`].
    pub fn window(&self) -> (usize, usize) {
        let (min_depth, max_depth) = if self.min_depth > self.max_depth {
            (self.max_depth, self.min_depth)
        } else {
            (self.min_depth, self.max_depth)
        };
        (min_depth.max(1), max_depth.min(MAX_DEPTH))
    }
}

/// Presentation style of a list container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Numbered list
    Ordered,
    /// Bulletless, unnumbered list
    Unnumbered,
}

impl ListKind {
    pub fn for_numbering(no_numbering: bool) -> Self {
        if no_numbering {
            ListKind::Unnumbered
        } else {
            ListKind::Ordered
        }
    }
}

/// A hyperlink with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// What a list item displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemContent {
    /// Synthesized item that only exists to hold a deeper list
    Placeholder,
    /// A heading of a page outline
    Heading(Link),
    /// A page entry of a title index, with the page title when shown
    Page { link: Link, title: Option<String> },
    /// An error notice shown in place of a page
    Message { text: String },
}

/// Item node: content, active marker and at most one nested list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: ItemContent,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublist: Option<List>,
}

impl ListItem {
    pub fn new(content: ItemContent) -> Self {
        Self {
            content,
            active: false,
            sublist: None,
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self::new(ItemContent::Message { text: text.into() })
    }

    /// The link this item points at, if any
    pub fn link(&self) -> Option<&Link> {
        match &self.content {
            ItemContent::Heading(link) | ItemContent::Page { link, .. } => Some(link),
            ItemContent::Placeholder | ItemContent::Message { .. } => None,
        }
    }
}

/// Container node: a list of items in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

impl List {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All nodes of the tree in pre-order, starting with this list
    pub fn nodes(&self) -> Vec<ListNode<'_>> {
        let mut nodes = Vec::new();
        self.collect_nodes(&mut nodes);
        nodes
    }

    fn collect_nodes<'a>(&'a self, nodes: &mut Vec<ListNode<'a>>) {
        nodes.push(ListNode::Container(self));
        for item in &self.items {
            nodes.push(ListNode::Item(item));
            if let Some(sublist) = &item.sublist {
                sublist.collect_nodes(nodes);
            }
        }
    }

    /// Number of items carrying a link, at any depth
    pub fn link_count(&self) -> usize {
        self.nodes()
            .iter()
            .filter(|node| matches!(node, ListNode::Item(item) if item.link().is_some()))
            .count()
    }
}

/// Borrowed view over the two node kinds of a list tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListNode<'a> {
    Container(&'a List),
    Item(&'a ListItem),
}

/// A rendered table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toc {
    /// Rendered inline with the text rather than as a side bar
    pub inline: bool,
    pub heading: Option<String>,
    /// Pages whose entries made it into the list, in list order
    #[serde(default)]
    pub pages: Vec<String>,
    pub list: List,
}
