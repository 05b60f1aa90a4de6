//! Error types for article-density.
//!
//! This module defines the error types returned by extraction operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML parsing failed.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// No extractable content was found in the document.
    #[error("No extractable content found")]
    NoContent,

    /// The text density distribution cannot discriminate between nodes.
    ///
    /// Raised when the population standard deviation of densities is zero
    /// (e.g. a single-candidate tree) or a derived score is non-finite.
    #[error("Degenerate text density distribution")]
    DegenerateDistribution,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
