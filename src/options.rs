//! Configuration options for content extraction.
//!
//! The `Options` struct controls the link-declutter heuristics applied to
//! the selected content node. The statistical scoring itself is not
//! configurable: its formula is the contract of this crate.

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_density::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     declutter_links: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Remove runs of link-like siblings from the selected content node.
    ///
    /// Default: `true`
    pub declutter_links: bool,

    /// Minimum ratio of anchor text to total text for a child element to be
    /// considered link-like (navigation, related-article chrome).
    ///
    /// Default: `0.6`
    pub link_text_ratio: f64,

    /// Anchor count at which a child element is considered link-like
    /// regardless of its text ratio.
    ///
    /// Default: `3`
    pub link_count_threshold: usize,

    /// Minimum length of a closed run of link-like siblings for the whole
    /// run to be removed. Isolated links (e.g. a source citation) survive.
    ///
    /// Default: `2`
    pub min_removal_run: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            declutter_links: true,
            link_text_ratio: 0.6,
            link_count_threshold: 3,
            min_removal_run: 2,
        }
    }
}
