//! Block label vocabulary.
//!
//! Labels are the side channel filters use to talk to each other: one filter
//! tags a block, a later filter reads the tag. The well-known labels get their
//! own variants; anything else travels as [`Label::Custom`], so new signals
//! need no change to [`TextBlock`](crate::TextBlock).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named tag attached to a block.
///
/// Labels serialize as their string token (see [`Label::as_str`]).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Label {
    /// The block matches the document title.
    Title,
    /// Byline, date line and similar article metadata.
    ArticleMetadata,
    /// The block marks the start of the terminal region (comments, related links).
    IndicatesEndOfText,
    /// Demoted by a largest-block selection, but may still belong to the article.
    MightBeContent,
    /// The block is the main content block.
    VeryLikelyContent,
    /// The block must never be considered content.
    StrictlyNotContent,
    /// Horizontal rule.
    Hr,
    /// List item.
    Li,
    /// Any heading.
    Heading,
    /// Level 1 heading.
    H1,
    /// Level 2 heading.
    H2,
    /// Level 3 heading.
    H3,
    /// Any other token.
    Custom(String),
}

impl Label {
    /// String token of this label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Title => "title",
            Self::ArticleMetadata => "article-metadata",
            Self::IndicatesEndOfText => "indicates-end-of-text",
            Self::MightBeContent => "might-be-content",
            Self::VeryLikelyContent => "very-likely-content",
            Self::StrictlyNotContent => "strictly-not-content",
            Self::Hr => "hr",
            Self::Li => "li",
            Self::Heading => "heading",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Custom(token) => token,
        }
    }
}

impl From<&str> for Label {
    fn from(token: &str) -> Self {
        match token {
            "title" => Self::Title,
            "article-metadata" => Self::ArticleMetadata,
            "indicates-end-of-text" => Self::IndicatesEndOfText,
            "might-be-content" => Self::MightBeContent,
            "very-likely-content" => Self::VeryLikelyContent,
            "strictly-not-content" => Self::StrictlyNotContent,
            "hr" => Self::Hr,
            "li" => Self::Li,
            "heading" => Self::Heading,
            "h1" => Self::H1,
            "h2" => Self::H2,
            "h3" => Self::H3,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for Label {
    fn from(token: String) -> Self {
        match Self::from(token.as_str()) {
            Self::Custom(_) => Self::Custom(token),
            known => known,
        }
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        match label {
            Label::Custom(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
