use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::toc::types::{ItemContent, List, ListItem, ListKind, Toc};

/// Serialize a rendered table of contents as an HTML fragment
pub fn toc_to_html(toc: &Toc) -> String {
    let class = if toc.inline { "wiki-toc-inline" } else { "wiki-toc" };
    let mut html = format!("<div class=\"{}\">", class);

    if let Some(heading) = toc.heading.as_deref().filter(|h| !h.is_empty()) {
        html.push_str(&format!("<h4>{}</h4>", encode_text(heading)));
    }

    push_list(&mut html, &toc.list);
    html.push_str("</div>");
    html
}

/// Serialize a list tree as nested `<ol>`/`<ul>` elements
pub fn list_to_html(list: &List) -> String {
    let mut html = String::new();
    push_list(&mut html, list);
    html
}

fn push_list(html: &mut String, list: &List) {
    let (open, close) = match list.kind {
        ListKind::Ordered => ("<ol>", "</ol>"),
        ListKind::Unnumbered => ("<ul style=\"list-style-type:none\">", "</ul>"),
    };

    html.push_str(open);
    for item in &list.items {
        push_item(html, item);
    }
    html.push_str(close);
}

fn push_item(html: &mut String, item: &ListItem) {
    html.push_str(if item.active { "<li class=\"active\">" } else { "<li>" });

    match &item.content {
        ItemContent::Placeholder => {}
        // Heading labels are markup already
        ItemContent::Heading(link) => {
            html.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                encode_double_quoted_attribute(&link.href),
                link.label
            ));
        }
        ItemContent::Page { link, title } => {
            html.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                encode_double_quoted_attribute(&link.href),
                encode_text(&link.label)
            ));
            if let Some(title) = title {
                html.push_str(": ");
                html.push_str(title);
            }
        }
        ItemContent::Message { text } => {
            html.push_str(&format!(
                "<div class=\"system-message\"><strong>{}</strong></div>",
                encode_text(text)
            ));
        }
    }

    if let Some(sublist) = &item.sublist {
        push_list(html, sublist);
    }
    html.push_str("</li>");
}
