//! The atomic unit of classification.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, Result};
use crate::labels::Label;

/// A contiguous run of text with precomputed shallow features.
///
/// The text and the numeric features are fixed once the block is built; only
/// [`merge_next`](Self::merge_next) combines them. The content flag and the
/// label set are what filters mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    text: String,
    num_words: usize,
    #[serde(default)]
    num_words_in_anchor_text: usize,
    tag_level: usize,
    offset_start: usize,
    offset_end: usize,
    #[serde(default)]
    is_content: bool,
    #[serde(default)]
    labels: BTreeSet<Label>,
}

impl TextBlock {
    /// Creates a block occupying the single ordinal position `offset`.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        num_words: usize,
        num_words_in_anchor_text: usize,
        offset: usize,
        tag_level: usize,
    ) -> Self {
        Self {
            text: text.into(),
            num_words,
            num_words_in_anchor_text,
            tag_level,
            offset_start: offset,
            offset_end: offset,
            is_content: false,
            labels: BTreeSet::new(),
        }
    }

    /// Creates an unlinked block, counting whitespace-separated words of `text`.
    #[must_use]
    pub fn from_text(text: impl Into<String>, offset: usize, tag_level: usize) -> Self {
        let text = text.into();
        let num_words = text.split_whitespace().count();
        Self::new(text, num_words, 0, offset, tag_level)
    }

    /// Sets the number of words inside hyperlink text.
    #[must_use]
    pub fn with_anchor_words(mut self, num_words_in_anchor_text: usize) -> Self {
        self.num_words_in_anchor_text = num_words_in_anchor_text;
        self
    }

    /// Marks the whole block as link text.
    #[must_use]
    pub fn fully_linked(mut self) -> Self {
        self.num_words_in_anchor_text = self.num_words;
        self
    }

    /// Widens the block to cover `offset_start..=offset_end`.
    #[must_use]
    pub fn with_offsets(mut self, offset_start: usize, offset_end: usize) -> Self {
        self.offset_start = offset_start;
        self.offset_end = offset_end;
        self
    }

    /// Sets the initial content flag.
    #[must_use]
    pub fn with_content(mut self, is_content: bool) -> Self {
        self.is_content = is_content;
        self
    }

    /// Adds a label.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.insert(label);
        self
    }

    /// The block text; parts of a merged block are separated by newlines.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// Words inside hyperlink text.
    #[must_use]
    pub fn num_words_in_anchor_text(&self) -> usize {
        self.num_words_in_anchor_text
    }

    /// Fraction of words inside hyperlink text; `0.0` for a block without words.
    #[must_use]
    pub fn link_density(&self) -> f64 {
        if self.num_words == 0 {
            0.0
        } else {
            self.num_words_in_anchor_text as f64 / self.num_words as f64
        }
    }

    /// Nesting depth in the source markup; a merged block keeps the shallower one.
    #[must_use]
    pub fn tag_level(&self) -> usize {
        self.tag_level
    }

    /// First ordinal position covered by the block.
    #[must_use]
    pub fn offset_start(&self) -> usize {
        self.offset_start
    }

    /// Last ordinal position covered by the block (inclusive).
    #[must_use]
    pub fn offset_end(&self) -> usize {
        self.offset_end
    }

    /// Current verdict: `true` for main content, `false` for boilerplate.
    #[must_use]
    pub fn is_content(&self) -> bool {
        self.is_content
    }

    /// Sets the content flag, returning `true` if it changed.
    pub fn set_is_content(&mut self, is_content: bool) -> bool {
        if self.is_content == is_content {
            false
        } else {
            self.is_content = is_content;
            true
        }
    }

    /// Labels left by filters, in a stable order.
    #[must_use]
    pub fn labels(&self) -> &BTreeSet<Label> {
        &self.labels
    }

    #[must_use]
    pub fn has_label(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    /// Adds a label, returning `true` if it was not present yet.
    pub fn add_label(&mut self, label: Label) -> bool {
        self.labels.insert(label)
    }

    /// Adds several labels at once.
    pub fn add_labels(&mut self, labels: impl IntoIterator<Item = Label>) {
        self.labels.extend(labels);
    }

    /// Absorbs the block that directly follows this one.
    ///
    /// Texts are joined by a newline and word counts are summed, so the link
    /// density of the result is the word-weighted average of both. The offset
    /// range and labels are unioned, the shallower tag level wins and the merged
    /// block is content if either part was.
    pub fn merge_next(&mut self, next: TextBlock) {
        self.text.push('\n');
        self.text.push_str(&next.text);
        self.num_words += next.num_words;
        self.num_words_in_anchor_text += next.num_words_in_anchor_text;
        self.offset_start = self.offset_start.min(next.offset_start);
        self.offset_end = self.offset_end.max(next.offset_end);
        self.tag_level = self.tag_level.min(next.tag_level);
        self.is_content |= next.is_content;
        self.labels.extend(next.labels);
    }

    /// Checks the block's features for internal consistency.
    ///
    /// `index` is only used to locate the block in the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.offset_end < self.offset_start {
            return Err(ExtractionError::InvalidBlock {
                index,
                reason: format!(
                    "offset range ends ({}) before it starts ({})",
                    self.offset_end, self.offset_start
                ),
            });
        }
        if self.num_words_in_anchor_text > self.num_words {
            return Err(ExtractionError::InvalidBlock {
                index,
                reason: format!(
                    "{} anchor words exceed {} words",
                    self.num_words_in_anchor_text, self.num_words
                ),
            });
        }
        Ok(())
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}-{};tl={};nw={};ld={:.3}]\t{}\t",
            self.offset_start,
            self.offset_end,
            self.tag_level,
            self.num_words,
            self.link_density(),
            if self.is_content { "CONTENT" } else { "boilerplate" },
        )?;
        let labels: Vec<&str> = self.labels.iter().map(Label::as_str).collect();
        write!(f, "{}\n{}", labels.join(","), self.text)
    }
}
