//! Core extraction pipeline.
//!
//! Parses the document, strips non-content elements, runs the statistics
//! and density passes over the body, selects and declutters the winning
//! subtree, and assembles the final article together with title/summary
//! metadata taken from the original markup.

use dom_query::{Document, Selection};

use crate::article::Article;
use crate::declutter;
use crate::density;
use crate::dom;
use crate::error::{Error, Result};
use crate::metadata;
use crate::options::Options;
use crate::select;
use crate::stats;
use crate::text;

/// Main entry point for article extraction.
pub(crate) fn extract_article(html: &str, options: &Options) -> Result<Article> {
    if html.trim().is_empty() {
        return Err(Error::ParseError("empty input".to_string()));
    }

    // the scoring tree gets mutated (script/style removal, decluttering);
    // metadata later re-parses the untouched input
    let doc = Document::from(html);
    remove_script_and_style(&doc);

    let body = doc.select("body");
    if !body.exists() {
        return Err(Error::ParseError("document has no body".to_string()));
    }

    let mut table = stats::collect(&body);
    if table.is_empty() {
        return Err(Error::NoContent);
    }

    if cfg!(debug_assertions) {
        eprintln!("DEBUG: scoring {} candidate nodes", table.len());
    }

    density::score_nodes(&mut table)?;
    let (winner, confidence) = select::best_node(&table)?;

    let content = Selection::from(winner);
    if options.declutter_links {
        declutter::remove_successive_links(&content, options);
    }

    let content_html = dom::outer_html(&content).to_string();
    let content_text = text::collapse_blank_lines(&text::clean(&dom::text_content(&content)));
    let (title, summary) = metadata::document_info(html);

    if cfg!(debug_assertions) {
        eprintln!(
            "DEBUG: selected content with confidence {confidence:.3} ({} chars)",
            content_text.chars().count()
        );
    }

    Ok(Article {
        title,
        summary,
        content_text,
        content_html,
        score: confidence,
    })
}

fn remove_script_and_style(doc: &Document) {
    dom::remove(&doc.select("script"));
    dom::remove(&doc.select("style"));
}
