//! Compiled regex patterns used by the filters.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Title Matching Patterns
// =============================================================================

/// Separator sets tried, in order, when looking for the longest title part.
///
/// Each one splits a title like `"Storm hits coast | Daily Bugle » News"` into
/// its parts; the widest sets also split on commas, parentheses and NBSP.
pub static TITLE_PART_SEPARATORS: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    [
        r"[ ]*[|»\-][ ]*",
        r"[ ]*[|»:][ ]*",
        r"[ ]*[|»:()][ ]*",
        r"[ ]*[|»:()\-][ ]*",
        r"[ ]*[|»,:()\-][ ]*",
        r"[ ]*[|»,:()\-\x{a0}][ ]*",
    ]
    .map(|pattern| Regex::new(pattern).expect("TITLE_PART_SEPARATORS regex"))
});

/// Space-padded pipe, as in `"Headline | Site"`.
pub static TITLE_PIPE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]+\|[ ]+").expect("TITLE_PIPE_SEPARATOR regex"));

/// Space-padded dash, as in `"Headline - Site"`.
pub static TITLE_DASH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]+-[ ]+").expect("TITLE_DASH_SEPARATOR regex"));

/// Trailing `" - site name"` part of a title.
pub static TITLE_TRAILING_DASH_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" - [^\-]+$").expect("TITLE_TRAILING_DASH_PART regex"));

/// Leading `"site name - "` part of a title.
pub static TITLE_LEADING_DASH_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\-]+ - ").expect("TITLE_LEADING_DASH_PART regex"));

/// Punctuation ignored when comparing block text with a title.
pub static TITLE_IGNORED_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?!.\-:]+").expect("TITLE_IGNORED_PUNCTUATION regex"));

// =============================================================================
// End-of-Text Patterns
// =============================================================================

/// Comment counters such as `"12 comments"` or `"3 users responded in this post"`.
pub static COMMENT_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+ (?:comments|users responded in)").expect("COMMENT_COUNT regex")
});

/// Lower-case prefixes that open a comment or related-links section.
pub const END_OF_TEXT_PREFIXES: [&str; 6] = [
    "comments",
    "© reuters",
    "please rate this",
    "post a comment",
    "related articles",
    "related stories",
];

/// Lower-case fragments that mark a comment section anywhere in a short block.
pub const END_OF_TEXT_FRAGMENTS: [&str; 7] = [
    "what you think...",
    "add your comment",
    "add comment",
    "reader views",
    "have your say",
    "reader comments",
    "rätta artikeln",
];

/// Exact closing line of a closed comment section.
pub const END_OF_TEXT_CLOSED_FEEDBACK: &str = "thanks for your comments - this feedback is now closed";
