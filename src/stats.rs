//! Per-node subtree statistics.
//!
//! A post-order pass over the body computes, for every element that has at
//! least one element child, a self-contained summary of its subtree: text
//! volume, link text volume, structural node counts, paragraph counts, and
//! punctuation counts. Link-heavy boilerplate (navigation, related-article
//! lists) separates from narrative text on exactly these counters.
//!
//! Leaf elements are never registered; they only feed their counters into
//! the nearest registered ancestor.

use dom_query::{NodeRef, Selection};

use crate::dom;
use crate::text;

/// Statistics record for one internal DOM node.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct NodeInfo {
    /// Length in chars of the node's cleaned subtree text.
    pub text_len: usize,
    /// Cleaned text length contributed by anchor leaf descendants.
    pub link_text_len: usize,
    /// Structural node count of the subtree (self included).
    pub tag_count: usize,
    /// Anchor leaf count in the subtree.
    pub link_tag_count: usize,
    /// Paragraph count in the subtree.
    pub p_count: usize,
    /// Unicode punctuation chars in the node's cleaned text.
    pub punct_count: usize,
    /// Text density, filled in by the scorer.
    pub text_density: f64,
    /// Symbol (punctuation) density, filled in by the scorer.
    pub symbol_density: f64,
    /// Final ranking score, filled in by the scorer.
    pub score: f64,
}

/// Statistics table keyed by node identity.
///
/// `dom_query` documents are arenas, so a `NodeRef` is a stable (tree, id)
/// address; post-order insertion registers each internal node exactly once.
pub(crate) type NodeStats<'a> = Vec<(NodeRef<'a>, NodeInfo)>;

/// Collect statistics for every internal node under `body`.
pub(crate) fn collect<'a>(body: &Selection<'a>) -> NodeStats<'a> {
    let mut stats = Vec::new();
    if let Some(root) = body.nodes().first() {
        compute_info(*root, &mut stats);
    }
    stats
}

fn compute_info<'a>(node: NodeRef<'a>, stats: &mut NodeStats<'a>) -> NodeInfo {
    let mut info = NodeInfo::default();
    let children = dom::element_children(&node);

    if children.is_empty() {
        if dom::has_tag(&node, "a") {
            info.link_tag_count = 1;
            info.link_text_len = clean_text_len(node);
        } else if dom::has_tag(&node, "p") {
            info.p_count = 1;
        }
        info.tag_count = 1;
        // leaves are returned to the parent but never registered
        return info;
    }

    if dom::has_tag(&node, "p") {
        // Paragraphs are opaque: a <p> wrapping inline elements counts as a
        // single paragraph and its descendants are not walked individually.
        info.p_count += 1;
    } else {
        for child in children {
            let child_info = compute_info(child, stats);
            info.link_text_len += child_info.link_text_len;
            info.tag_count += child_info.tag_count;
            info.link_tag_count += child_info.link_tag_count;
            info.p_count += child_info.p_count;
        }
    }

    // Text and punctuation are measured over the node's whole subtree text,
    // not summed from children.
    let own_text = text::clean(&Selection::from(node).text());
    info.text_len = own_text.chars().count();
    info.punct_count = text::count_punctuation(&own_text);
    info.tag_count += 1;

    stats.push((node, info.clone()));
    info
}

fn clean_text_len(node: NodeRef) -> usize {
    text::clean(&Selection::from(node).text()).chars().count()
}
