use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::toc::HeadingEntry;

lazy_static! {
    /// `== Heading ==` with an optional explicit `#anchor`
    static ref WIKI_HEADING: Regex = Regex::new(
        r"^\s*(={1,6})\s+(.*?)(?:\s+=+)?(?:\s+#([A-Za-z][\w:.-]*))?\s*$"
    ).unwrap();

    /// `## Heading` with optional closing hashes
    static ref HASH_HEADING: Regex = Regex::new(r"^(#{1,6})\s+(.+?)(?:\s+#+)?\s*$").unwrap();
}

/// Produces the flat heading outline of a page
pub trait HeadingExtractor: Send + Sync {
    fn outline(&self, text: &str) -> Vec<HeadingEntry>;
}

/// Line based extractor for wiki (`= x =`) and hash (`# x`) headings.
///
/// Lines inside `{{{ ... }}}` and fenced ``` blocks are never headings.
/// Anchors come from an explicit `#anchor` suffix or a slug of the heading
/// text, made unique within the page by a numeric suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct WikiHeadingExtractor;

impl WikiHeadingExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl HeadingExtractor for WikiHeadingExtractor {
    fn outline(&self, text: &str) -> Vec<HeadingEntry> {
        let mut entries = Vec::new();
        let mut anchors = HashSet::new();
        let mut fence: Option<&str> = None;

        for line in text.lines() {
            let trimmed = line.trim();

            if let Some(close) = fence {
                if trimmed.starts_with(close) {
                    fence = None;
                }
                continue;
            }
            if trimmed.starts_with("{{{") {
                if !trimmed.ends_with("}}}") || trimmed.len() < 6 {
                    fence = Some("}}}");
                }
                continue;
            }
            if trimmed.starts_with("```") {
                fence = Some("```");
                continue;
            }

            let Some((depth, heading, explicit_anchor)) = parse_heading(line) else {
                continue;
            };

            let mut base = explicit_anchor.unwrap_or_else(|| slug::slugify(&heading));
            if base.is_empty() {
                base = "section".to_string();
            }
            let anchor = unique_anchor(&mut anchors, base);

            entries.push(HeadingEntry::new(
                depth,
                anchor,
                html_escape::encode_text(&heading).into_owned(),
            ));
        }

        entries
    }
}

fn parse_heading(line: &str) -> Option<(usize, String, Option<String>)> {
    let (depth, heading, anchor) = if let Some(cap) = WIKI_HEADING.captures(line) {
        let heading = cap[2].trim().trim_end_matches('=').trim_end().to_string();
        (cap[1].len(), heading, cap.get(3).map(|m| m.as_str().to_string()))
    } else if let Some(cap) = HASH_HEADING.captures(line) {
        (cap[1].len(), cap[2].trim().to_string(), None)
    } else {
        return None;
    };

    if heading.is_empty() || heading.chars().all(|c| c == '=') {
        return None;
    }
    Some((depth, heading, anchor))
}

fn unique_anchor(seen: &mut HashSet<String>, base: String) -> String {
    if seen.insert(base.clone()) {
        return base;
    }

    let mut counter = 1;
    loop {
        let candidate = format!("{}-{}", base, counter);
        if seen.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}
