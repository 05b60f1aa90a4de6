//! Link-cluster removal from the selected content node.
//!
//! News pages routinely put previous/next links, source citations, and
//! related-article lists as direct siblings of the article text. These show
//! up as consecutive runs of link-like children; runs of two or more get
//! stripped, while an isolated link (a lone source citation) survives.

use dom_query::{NodeRef, Selection};

use crate::dom;
use crate::options::Options;
use crate::text;

/// Remove runs of consecutive link-like children from `node`, in place.
///
/// A child is link-like when it is an anchor itself, or when its anchor
/// descendants dominate it by text ratio or by count. Removal candidates are
/// collected during the scan and detached afterwards in one batch; the live
/// child list is never mutated mid-iteration.
pub(crate) fn remove_successive_links(node: &Selection, options: &Options) {
    let Some(root) = node.nodes().first() else {
        return;
    };

    let mut run: Vec<NodeRef> = Vec::new();
    let mut marked: Vec<NodeRef> = Vec::new();
    let mut last_index: Option<usize> = None;

    for (i, child) in dom::element_children(root).into_iter().enumerate() {
        if dom::has_tag(&child, "a") {
            last_index = Some(i);
            run.push(child);
        } else {
            let child_sel = Selection::from(child);
            let anchors = child_sel.select("a");
            let anchor_count = anchors.length();

            if anchor_count > 0 {
                let link_len = combined_clean_len(&anchors) as f64;
                let own_len = text::clean(&child_sel.text()).chars().count() as f64;
                let ratio = link_len / own_len;

                if ratio >= options.link_text_ratio
                    || anchor_count >= options.link_count_threshold
                {
                    if anchor_count == 1 {
                        // the single anchor, not its wrapper, joins the run
                        if let Some(anchor) = anchors.nodes().first() {
                            last_index = Some(i);
                            run.push(*anchor);
                        }
                    } else {
                        // a wrapper holding several links goes regardless of the run
                        marked.push(child);
                        last_index = Some(i);
                    }
                }
            }
        }

        // a non-link-like child (or index gap) closes the current run
        if last_index.is_some_and(|last| last != i) {
            if run.len() >= options.min_removal_run {
                marked.append(&mut run);
            } else {
                run.clear();
            }
            last_index = None;
        }
    }

    for candidate in marked {
        dom::remove(&Selection::from(candidate));
    }
}

/// Cleaned length of the concatenated text of every anchor in the selection.
fn combined_clean_len(anchors: &Selection) -> usize {
    let mut buf = String::new();
    for anchor in anchors.iter() {
        buf.push_str(&anchor.text());
    }
    text::clean(&buf).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn declutter(doc: &Document, selector: &str) {
        let sel = doc.select(selector);
        remove_successive_links(&sel, &Options::default());
    }

    #[test]
    fn run_of_anchors_before_paragraph_is_removed() {
        let doc = Document::from(
            r#"<div id="c"><a href="/1">one</a><a href="/2">two</a><a href="/3">three</a><a href="/4">four</a><p>Paragraph stays.</p></div>"#,
        );

        declutter(&doc, "#c");

        assert_eq!(doc.select("#c a").length(), 0);
        assert!(doc.select("#c p").exists());
        assert!(doc.select("#c").text().contains("Paragraph stays."));
    }

    #[test]
    fn lone_wrapped_anchor_survives() {
        // the anchor holds ~64% of the wrapper's text, so the wrapper is
        // link-like; but a run of one is never removed
        let doc = Document::from(
            r#"<div id="c"><div><a href="/t">1234567</a> xyz</div><p>After text.</p></div>"#,
        );

        declutter(&doc, "#c");

        assert!(doc.select(r#"a[href="/t"]"#).exists());
        assert!(doc.select("#c p").exists());
    }

    #[test]
    fn wrapper_with_several_anchors_is_removed_outright() {
        let doc = Document::from(
            r#"<div id="c"><div class="rel"><a href="/1">One</a><a href="/2">Two</a></div><p>Body text follows here.</p></div>"#,
        );

        declutter(&doc, "#c");

        assert!(doc.select(".rel").is_empty());
        assert!(doc.select("#c p").exists());
    }

    #[test]
    fn isolated_links_are_preserved() {
        let doc = Document::from(
            r#"<div id="c"><a href="/src">Source</a><div>Plain commentary text without any links in it.</div><a href="/more">More</a></div>"#,
        );

        declutter(&doc, "#c");

        assert_eq!(doc.select("#c a").length(), 2);
    }

    #[test]
    fn low_ratio_wrapper_is_untouched() {
        // one short link inside a long paragraph-like div: ratio well under
        // the threshold and only one anchor
        let doc = Document::from(
            r#"<div id="c"><div>A long passage of commentary that mentions <a href="/ref">a reference</a> in passing while carrying on.</div><p>Next.</p></div>"#,
        );

        declutter(&doc, "#c");

        assert!(doc.select(r#"a[href="/ref"]"#).exists());
    }

    #[test]
    fn trailing_run_without_a_break_is_kept() {
        // runs are only flushed when a later child closes them; links at the
        // very end of the child list stay put
        let doc = Document::from(
            r#"<div id="c"><p>Closing paragraph.</p><a href="/1">one</a><a href="/2">two</a></div>"#,
        );

        declutter(&doc, "#c");

        assert_eq!(doc.select("#c a").length(), 2);
    }

    #[test]
    fn declutter_is_idempotent() {
        let doc = Document::from(
            r#"<div id="c"><a href="/1">one</a><a href="/2">two</a><p>Paragraph stays.</p><a href="/src">Source</a></div>"#,
        );

        declutter(&doc, "#c");
        let first_pass = doc.select("#c").html().to_string();

        declutter(&doc, "#c");
        let second_pass = doc.select("#c").html().to_string();

        assert_eq!(first_pass, second_pass);
        // trailing isolated link survived both passes
        assert!(doc.select(r#"a[href="/src"]"#).exists());
    }
}
