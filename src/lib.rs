//! # article-density
//!
//! Main-content extraction for news-style HTML pages.
//!
//! The extractor scores every internal node of the document body on a
//! text-density statistic (non-link text per non-link structural node),
//! normalizes the scores by the tree's own density distribution, picks the
//! highest-scoring subtree as the article body, and strips runs of
//! navigation-style links from it. A title and summary are derived
//! independently from the original markup.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_density::extract;
//!
//! let html = r#"<html><head><title>Dispatch</title><meta name="description" content="Evening dispatch."></head><body><div id="nav"><a href="/">Home</a><a href="/news">News</a><a href="/about">About</a></div><div id="story"><p>The quick brown fox jumps over the lazy dog, again and again, until the evening settles.</p><p>Reporters gathered outside the old courthouse, waiting for a verdict that never seemed to come.</p></div></body></html>"#;
//!
//! let article = extract(html)?;
//! assert_eq!(article.title, "Dispatch");
//! assert!(article.content_text.contains("Reporters"));
//! assert!(article.score > 0.0);
//! # Ok::<(), article_density::Error>(())
//! ```
//!
//! Extraction either returns a fully populated [`Article`] or a typed
//! [`Error`]; there are no partial results. Each call owns all of its state,
//! so independent calls can run in parallel without synchronization.

mod article;
mod declutter;
mod density;
mod error;
mod extract;
mod metadata;
mod options;
mod patterns;
mod select;
mod stats;
mod text;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use article::Article;
pub use error::{Error, Result};
pub use options::Options;

/// Extracts the main article from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use article_density::extract;
///
/// let html = r#"<html><body><div><a href="/">Home</a><a href="/news">News</a><a href="/about">About</a></div><div id="story"><p>The quick brown fox jumps over the lazy dog, again and again, until the evening settles.</p><p>Reporters gathered outside the old courthouse, waiting for a verdict that never seemed to come.</p></div></body></html>"#;
/// let article = extract(html)?;
/// assert!(article.content_text.contains("quick brown fox"));
/// # Ok::<(), article_density::Error>(())
/// ```
pub fn extract(html: &str) -> Result<Article> {
    extract_with_options(html, &Options::default())
}

/// Extracts the main article from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use article_density::{extract_with_options, Options};
///
/// let html = r#"<html><body><div><a href="/">Home</a><a href="/news">News</a><a href="/about">About</a></div><div id="story"><p>The quick brown fox jumps over the lazy dog, again and again, until the evening settles.</p><p>Reporters gathered outside the old courthouse, waiting for a verdict that never seemed to come.</p></div></body></html>"#;
/// let options = Options {
///     declutter_links: false,
///     ..Options::default()
/// };
/// let article = extract_with_options(html, &options)?;
/// # Ok::<(), article_density::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<Article> {
    extract::extract_article(html, options)
}

/// Extracts the main article from HTML bytes with automatic encoding detection.
///
/// Detects the charset declared in the document head (`<meta charset>` or
/// `Content-Type`), transcodes to UTF-8 with lossy replacement of invalid
/// sequences, and extracts as [`extract`] does.
pub fn extract_bytes(html: &[u8]) -> Result<Article> {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str)
}

/// Extracts the main article from HTML bytes with custom options and
/// automatic encoding detection.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<Article> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
