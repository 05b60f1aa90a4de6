//! Result type for extraction output.
//!
//! This module defines the structured output from content extraction:
//! the selected article body in text and HTML form plus page metadata.

use serde::{Deserialize, Serialize};

/// Result of article extraction from an HTML document.
///
/// Contains the extracted main content in both text and HTML formats,
/// a title and summary derived from the original document, and the
/// confidence score of the selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Page title: first `h1` text, falling back to the `<title>` element.
    pub title: String,

    /// Page summary from the first description meta tag, empty if none.
    pub summary: String,

    /// Main content as plain text with collapsed blank lines.
    pub content_text: String,

    /// Main content as HTML (preserves structure of the selected subtree).
    pub content_html: String,

    /// Confidence ratio of the selection: the winning node's score divided
    /// by the mean score over all candidate nodes. Unbounded; values well
    /// above 1 indicate a clear winner.
    pub score: f64,
}
