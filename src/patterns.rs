//! Compiled regex patterns for text normalization.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches spaces and tabs immediately before a newline.
pub static WHITESPACE_BEFORE_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("WHITESPACE_BEFORE_NEWLINE regex"));

/// Matches spaces and tabs immediately after a newline.
pub static WHITESPACE_AFTER_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]+").expect("WHITESPACE_AFTER_NEWLINE regex"));

/// Matches runs of two or more spaces.
pub static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("SPACE_RUNS regex"));

/// Matches runs of two or more tabs.
pub static TAB_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t{2,}").expect("TAB_RUNS regex"));

/// Matches runs of two or more newlines (blank lines).
pub static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("NEWLINE_RUNS regex"));
