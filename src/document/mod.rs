//! Document model shared by every filter.
//!
//! A [`TextDocument`] is an ordered sequence of [`TextBlock`]s in reading
//! order plus an optional title. Filters receive it by exclusive reference and
//! mutate it in place.

mod block;

pub use block::TextBlock;

use serde::{Deserialize, Serialize};

/// A block-structured document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextDocument {
    /// Title supplied by the caller (usually the HTML `<title>`).
    #[serde(default)]
    pub title: Option<String>,

    /// Blocks in reading order.
    pub blocks: Vec<TextBlock>,
}

impl TextDocument {
    #[must_use]
    pub fn new(title: Option<String>, blocks: Vec<TextBlock>) -> Self {
        Self { title, blocks }
    }

    /// Title, if one was given and it is not blank.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Text of all content blocks, one block per line.
    #[must_use]
    pub fn content(&self) -> String {
        self.text(true, false)
    }

    /// Text of the selected blocks, one block per line.
    #[must_use]
    pub fn text(&self, include_content: bool, include_non_content: bool) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            let wanted = if block.is_content() {
                include_content
            } else {
                include_non_content
            };
            if !wanted {
                continue;
            }
            out.push_str(block.text());
            out.push('\n');
        }
        out
    }

    /// Blocks currently flagged as content.
    pub fn content_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter(|b| b.is_content())
    }

    /// One line of features per block followed by its text, for debugging.
    #[must_use]
    pub fn debug_string(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            out.push_str(&block.to_string());
            out.push('\n');
        }
        out
    }
}
