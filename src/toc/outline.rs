use log::trace;

use crate::toc::resolver::LinkResolver;
use crate::toc::types::{
    HeadingEntry, ItemContent, Link, List, ListItem, ListKind, RenderParams, MAX_DEPTH,
};

type ListId = usize;
type ItemId = usize;

#[derive(Debug)]
struct ArenaList {
    kind: ListKind,
    items: Vec<ItemId>,
}

#[derive(Debug)]
struct ArenaItem {
    content: ItemContent,
    active: bool,
    sublist: Option<ListId>,
}

/// Node storage while the tree is being built.
///
/// Open items at several depths are referenced by index, then the arena is
/// folded into an owned [`List`] tree once every entry has been placed.
#[derive(Debug, Default)]
struct Arena {
    lists: Vec<ArenaList>,
    items: Vec<ArenaItem>,
}

impl Arena {
    fn new_list(&mut self, kind: ListKind) -> ListId {
        self.lists.push(ArenaList {
            kind,
            items: Vec::new(),
        });
        self.lists.len() - 1
    }

    fn append_item(&mut self, list: ListId, content: ItemContent, active: bool) -> ItemId {
        self.items.push(ArenaItem {
            content,
            active,
            sublist: None,
        });
        let id = self.items.len() - 1;
        self.lists[list].items.push(id);
        id
    }

    fn attach_sublist(&mut self, item: ItemId, kind: ListKind) -> ListId {
        let list = self.new_list(kind);
        debug_assert!(self.items[item].sublist.is_none());
        self.items[item].sublist = Some(list);
        list
    }

    fn into_tree(mut self, root: ListId) -> List {
        self.build_list(root)
    }

    fn build_list(&mut self, id: ListId) -> List {
        let kind = self.lists[id].kind;
        let item_ids = std::mem::take(&mut self.lists[id].items);
        let items = item_ids.into_iter().map(|item| self.build_item(item)).collect();
        List { kind, items }
    }

    fn build_item(&mut self, id: ItemId) -> ListItem {
        let content = std::mem::replace(&mut self.items[id].content, ItemContent::Placeholder);
        let active = self.items[id].active;
        let sublist = self.items[id].sublist.map(|list| self.build_list(list));
        ListItem {
            content,
            active,
            sublist,
        }
    }
}

/// The open item and the list new items go into, for one depth
#[derive(Debug, Clone, Copy)]
struct Slot {
    item: Option<ItemId>,
    list: ListId,
}

/// Build the nested list for one page outline.
///
/// Entries outside the depth window of `params` are ignored. Skipped levels
/// (a depth-4 heading right under a depth-1 one) get placeholder items so the
/// deeper heading still lands at its own nesting level. With `params.active`
/// the first heading placed at the top level of the window is marked active.
pub fn outline_tree<R>(entries: &[HeadingEntry], params: &RenderParams, resolver: &R) -> List
where
    R: LinkResolver + ?Sized,
{
    let kind = ListKind::for_numbering(params.no_numbering);
    let (min_depth, max_depth) = params.window();

    let mut arena = Arena::default();
    let root = arena.new_list(kind);
    if min_depth > max_depth {
        return arena.into_tree(root);
    }

    // Slots deeper than the last placed entry are stale; they are always
    // reset by the gap walk below before anything reads them.
    let mut slots = [Slot { item: None, list: root }; MAX_DEPTH + 2];
    let mut previous_depth = min_depth;
    let mut pending_active = params.active;

    for entry in entries {
        let depth = entry.depth;
        if depth < min_depth || depth > max_depth {
            continue;
        }

        for level in previous_depth..depth {
            let slot = slots[level];
            let item = match slot.item {
                Some(item) => item,
                None => {
                    let placeholder = arena.append_item(slot.list, ItemContent::Placeholder, false);
                    slots[level].item = Some(placeholder);
                    placeholder
                }
            };
            let sublist = arena.attach_sublist(item, kind);
            slots[level + 1] = Slot {
                item: None,
                list: sublist,
            };
        }

        let link = Link {
            label: entry.heading.clone(),
            href: resolver.resolve(&entry.anchor),
        };
        trace!("Placing heading '{}' at depth {} -> {}", entry.heading, depth, link.href);

        let active = pending_active && depth == min_depth;
        if active {
            pending_active = false;
        }
        let list = slots[depth].list;
        let item = arena.append_item(list, ItemContent::Heading(link), active);
        slots[depth] = Slot {
            item: Some(item),
            list,
        };
        previous_depth = depth;
    }

    arena.into_tree(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(anchor: &str) -> String {
        format!("/wiki/Page#{}", anchor)
    }

    fn entries(pairs: &[(usize, &str)]) -> Vec<HeadingEntry> {
        pairs.iter()
            .map(|(depth, name)| HeadingEntry::new(*depth, name.to_lowercase(), *name))
            .collect()
    }

    fn params(min_depth: usize, max_depth: usize) -> RenderParams {
        RenderParams {
            min_depth,
            max_depth,
            ..RenderParams::default()
        }
    }

    fn label(item: &ListItem) -> Option<&str> {
        item.link().map(|link| link.label.as_str())
    }

    fn labels(list: &List) -> Vec<Option<&str>> {
        list.items.iter().map(label).collect()
    }

    #[test]
    fn test_empty_outline_gives_empty_list() {
        let list = outline_tree(&[], &RenderParams::default(), &resolver);
        assert!(list.is_empty());
        assert_eq!(list.kind, ListKind::Ordered);
    }

    #[test]
    fn test_single_entry() {
        let list = outline_tree(&entries(&[(1, "Intro")]), &RenderParams::default(), &resolver);

        assert_eq!(list.items.len(), 1);
        let item = &list.items[0];
        assert!(item.sublist.is_none());
        assert!(!item.active);
        assert_eq!(
            item.link(),
            Some(&Link {
                label: "Intro".to_string(),
                href: "/wiki/Page#intro".to_string(),
            })
        );
    }

    #[test]
    fn test_nested_siblings() {
        let outline = entries(&[(1, "A"), (2, "B"), (2, "C"), (3, "D"), (1, "E")]);
        let list = outline_tree(&outline, &RenderParams::default(), &resolver);

        assert_eq!(labels(&list), vec![Some("A"), Some("E")]);
        let a = list.items[0].sublist.as_ref().unwrap();
        assert_eq!(labels(a), vec![Some("B"), Some("C")]);
        assert!(a.items[0].sublist.is_none());
        let c = a.items[1].sublist.as_ref().unwrap();
        assert_eq!(labels(c), vec![Some("D")]);
        assert!(list.items[1].sublist.is_none());
    }

    #[test]
    fn test_depth_gap_synthesizes_placeholders() {
        let outline = vec![HeadingEntry::new(1, "a", "A"), HeadingEntry::new(4, "b", "B")];
        let list = outline_tree(&outline, &params(1, 6), &resolver);

        assert_eq!(labels(&list), vec![Some("A")]);
        let depth2 = list.items[0].sublist.as_ref().unwrap();
        assert_eq!(depth2.items.len(), 1);
        assert_eq!(depth2.items[0].content, ItemContent::Placeholder);
        let depth3 = depth2.items[0].sublist.as_ref().unwrap();
        assert_eq!(depth3.items.len(), 1);
        assert_eq!(depth3.items[0].content, ItemContent::Placeholder);
        let depth4 = depth3.items[0].sublist.as_ref().unwrap();
        assert_eq!(labels(depth4), vec![Some("B")]);
        assert!(depth4.items[0].sublist.is_none());
    }

    #[test]
    fn test_first_entry_below_min_depth_gets_placeholder_root_item() {
        let list = outline_tree(&entries(&[(3, "Deep")]), &params(1, 6), &resolver);

        assert_eq!(labels(&list), vec![None]);
        let depth2 = list.items[0].sublist.as_ref().unwrap();
        assert_eq!(labels(depth2), vec![None]);
        let depth3 = depth2.items[0].sublist.as_ref().unwrap();
        assert_eq!(labels(depth3), vec![Some("Deep")]);
    }

    #[test]
    fn test_depth_window_filters_and_promotes() {
        let outline = entries(&[(1, "Title"), (2, "Two"), (3, "Three"), (4, "Four")]);
        let list = outline_tree(&outline, &params(2, 3), &resolver);

        assert_eq!(labels(&list), vec![Some("Two")]);
        let nested = list.items[0].sublist.as_ref().unwrap();
        assert_eq!(labels(nested), vec![Some("Three")]);
        assert!(nested.items[0].sublist.is_none());
    }

    #[test]
    fn test_swapped_bounds_match_ordered_bounds() {
        let outline = entries(&[(1, "A"), (2, "B"), (5, "C"), (3, "D"), (6, "E"), (2, "F")]);
        let swapped = outline_tree(&outline, &params(5, 2), &resolver);
        let ordered = outline_tree(&outline, &params(2, 5), &resolver);
        assert_eq!(swapped, ordered);
        assert_eq!(ordered.link_count(), 4);
    }

    #[test]
    fn test_max_depth_clamped_to_six() {
        let outline = entries(&[(1, "A"), (6, "F"), (7, "G")]);
        let list = outline_tree(&outline, &params(1, 10), &resolver);
        assert_eq!(list.link_count(), 2);
    }

    #[test]
    fn test_window_beyond_six_renders_nothing() {
        let outline = entries(&[(1, "A"), (6, "F")]);
        let list = outline_tree(&outline, &params(7, 9), &resolver);
        assert!(list.is_empty());
    }

    #[test]
    fn test_numbering_toggle_applies_at_every_level() {
        let outline = entries(&[(1, "A"), (2, "B"), (4, "C")]);

        let plain = outline_tree(
            &outline,
            &RenderParams {
                no_numbering: true,
                ..RenderParams::default()
            },
            &resolver,
        );
        let numbered = outline_tree(&outline, &RenderParams::default(), &resolver);

        let kinds = |list: &List| -> Vec<ListKind> {
            list.nodes()
                .iter()
                .filter_map(|node| match node {
                    crate::toc::types::ListNode::Container(list) => Some(list.kind),
                    crate::toc::types::ListNode::Item(_) => None,
                })
                .collect()
        };

        let plain_kinds = kinds(&plain);
        let numbered_kinds = kinds(&numbered);
        assert_eq!(plain_kinds.len(), 4);
        assert!(plain_kinds.iter().all(|kind| *kind == ListKind::Unnumbered));
        assert_eq!(numbered_kinds.len(), 4);
        assert!(numbered_kinds.iter().all(|kind| *kind == ListKind::Ordered));
    }

    #[test]
    fn test_decrease_then_increase_nests_under_latest_item() {
        let outline = entries(&[(2, "A"), (1, "B"), (3, "C")]);
        let list = outline_tree(&outline, &params(1, 6), &resolver);

        // A sits under a placeholder, B is a sibling of that placeholder.
        assert_eq!(labels(&list), vec![None, Some("B")]);
        let under_placeholder = list.items[0].sublist.as_ref().unwrap();
        assert_eq!(labels(under_placeholder), vec![Some("A")]);

        let under_b = list.items[1].sublist.as_ref().unwrap();
        assert_eq!(labels(under_b), vec![None]);
        let depth3 = under_b.items[0].sublist.as_ref().unwrap();
        assert_eq!(labels(depth3), vec![Some("C")]);
    }

    #[test]
    fn test_active_marks_first_top_level_heading_only() {
        let outline = entries(&[(1, "Title"), (2, "Sub"), (1, "Other")]);
        let list = outline_tree(
            &outline,
            &RenderParams {
                active: true,
                ..RenderParams::default()
            },
            &resolver,
        );

        assert!(list.items[0].active);
        assert!(!list.items[1].active);
        let nested = list.items[0].sublist.as_ref().unwrap();
        assert!(!nested.items[0].active);
    }

    #[test]
    fn test_active_skips_placeholders() {
        let list = outline_tree(
            &entries(&[(2, "Sub")]),
            &RenderParams {
                active: true,
                ..RenderParams::default()
            },
            &resolver,
        );
        assert_eq!(list.items[0].content, ItemContent::Placeholder);
        assert!(!list.items[0].active);
    }

    #[test]
    fn test_active_goes_to_first_heading_after_leading_deeper_ones() {
        let outline = entries(&[(3, "Deep"), (2, "Sub"), (2, "Next")]);
        let list = outline_tree(
            &outline,
            &RenderParams {
                min_depth: 2,
                active: true,
                ..RenderParams::default()
            },
            &resolver,
        );

        assert_eq!(labels(&list), vec![None, Some("Sub"), Some("Next")]);
        let active: Vec<bool> = list.items.iter().map(|item| item.active).collect();
        assert_eq!(active, vec![false, true, false]);
        let deep = list.items[0].sublist.as_ref().unwrap();
        assert!(!deep.items[0].active);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let outline = entries(&[(1, "A"), (3, "B"), (2, "C"), (2, "D"), (4, "E")]);
        let first = outline_tree(&outline, &params(1, 6), &resolver);
        let second = outline_tree(&outline, &params(1, 6), &resolver);
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolver_receives_anchor() {
        let same_page = crate::toc::resolver::PageLinkResolver::new("/wiki/Page", "/wiki/Page");
        let list = outline_tree(&entries(&[(1, "Top")]), &RenderParams::default(), &same_page);
        assert_eq!(list.items[0].link().unwrap().href, "#top");
    }
}
