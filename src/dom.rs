//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate covering exactly the collaborator
//! surface the extractor needs: parsing, tag identification, ordered child
//! iteration, subtree text, attribute lookup, removal, and serialization.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get all text content of a selection's node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Serialize a selection's node and descendants back to markup.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Get tag name of the first node in a selection (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Check whether a node is an element with the given tag name.
#[must_use]
pub fn has_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element() && node.node_name().is_some_and(|n| n.eq_ignore_ascii_case(tag))
}

/// Direct element children of a node, in document order.
///
/// Text and comment nodes are skipped; this mirrors how a browser's
/// `children` collection (as opposed to `childNodes`) behaves.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// Get an attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, falling back to a default when absent.
#[must_use]
pub fn attr_or(sel: &Selection, name: &str, default: &str) -> String {
    sel.attr(name)
        .map_or_else(|| default.to_string(), |s| s.to_string())
}

/// Remove a selection's nodes from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}
