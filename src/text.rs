//! Text cleaning and character classification.
//!
//! Whitespace normalization here feeds every statistic the scorer computes,
//! so the same `clean` function is used for node text, link text, and the
//! final content output.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::patterns::{
    NEWLINE_RUNS, SPACE_RUNS, TAB_RUNS, WHITESPACE_AFTER_NEWLINE, WHITESPACE_BEFORE_NEWLINE,
};

/// Normalize whitespace in extracted DOM text.
///
/// Strips spaces and tabs adjacent to newlines, then collapses runs of
/// spaces, tabs, and newlines down to a single occurrence each. The result
/// contains no blank lines and no multi-space gaps, which keeps text length
/// comparisons between nodes meaningful.
#[must_use]
pub(crate) fn clean(text: &str) -> String {
    let text = WHITESPACE_BEFORE_NEWLINE.replace_all(text, "\n");
    let text = WHITESPACE_AFTER_NEWLINE.replace_all(&text, "\n");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = TAB_RUNS.replace_all(&text, "\t");
    NEWLINE_RUNS.replace_all(&text, "\n").into_owned()
}

/// Collapse remaining blank lines in final content output.
#[must_use]
pub(crate) fn collapse_blank_lines(text: &str) -> String {
    NEWLINE_RUNS.replace_all(text, "\n").into_owned()
}

/// Whether a character is Unicode punctuation (general category P).
///
/// Covers the full punctuation category, not just ASCII, so CJK sentence
/// marks like `。` and `，` count toward symbol density.
#[must_use]
pub(crate) fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Count punctuation characters in already-cleaned text.
#[must_use]
pub(crate) fn count_punctuation(text: &str) -> usize {
    text.chars().filter(|c| is_punctuation(*c)).count()
}
