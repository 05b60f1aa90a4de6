//! Title and summary extraction.
//!
//! Works on a fresh parse of the original, unmodified document, independent
//! of the script-stripped tree the scorer runs on.

use dom_query::{Document, Selection};

use crate::dom;
use crate::text;

/// Derive a title and summary from the raw document.
///
/// Title: cleaned text of the first `h1`, falling back to the `<title>`
/// element. Summary: content of the first `meta` tag whose `name` or
/// `property` attribute mentions "description", scanning in document order
/// and stopping at the first match. Both fall back to the empty string.
pub(crate) fn document_info(html: &str) -> (String, String) {
    let doc = Document::from(html);

    let mut title = doc
        .select("h1")
        .nodes()
        .first()
        .map(|node| text::clean(&Selection::from(*node).text()).trim().to_string())
        .unwrap_or_default();
    if title.is_empty() {
        title = doc.select("title").text().trim().to_string();
    }

    let mut summary = String::new();
    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);
        let name = dom::attr_or(&meta, "name", "");
        let property = dom::attr_or(&meta, "property", "");
        if name.contains("description") || property.contains("description") {
            summary = dom::attr_or(&meta, "content", "");
            break;
        }
    }

    (title, summary)
}
