//! Largest-block selection and its same-level expansion.

use tracing::trace;

use crate::document::{TextBlock, TextDocument};
use crate::error::Result;
use crate::labels::Label;

use super::DocumentFilter;

/// Default minimum words for the largest block and its same-level siblings.
pub const DEFAULT_LARGEST_BLOCK_MIN_WORDS: usize = 150;

/// Default minimum words for [`LargeBlockSameTagLevelToContentFilter`].
pub const DEFAULT_LARGE_BLOCK_MIN_WORDS: usize = 100;

/// Keeps only the largest content block.
///
/// The content block with the most words stays content and is labeled
/// [`Label::VeryLikelyContent`], provided it has at least `min_words` words;
/// on a tie the earliest block wins. Every other block becomes boilerplate and
/// is labeled [`Label::MightBeContent`]. Without a large enough block, nothing
/// stays content.
///
/// With `expand_to_same_tag_level`, the blocks directly around the chosen one
/// are restored as long as they sit at exactly its tag level and have at least
/// `min_words` words. The walk stops, in each direction, at the first block
/// that does not.
///
/// Documents with fewer than two blocks are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepLargestBlockFilter {
    expand_to_same_tag_level: bool,
    min_words: usize,
}

impl KeepLargestBlockFilter {
    #[must_use]
    pub fn new(expand_to_same_tag_level: bool, min_words: usize) -> Self {
        Self {
            expand_to_same_tag_level,
            min_words,
        }
    }

    fn is_sibling(&self, block: &TextBlock, level: usize) -> bool {
        block.tag_level() == level && block.num_words() >= self.min_words
    }
}

impl Default for KeepLargestBlockFilter {
    fn default() -> Self {
        Self::new(false, DEFAULT_LARGEST_BLOCK_MIN_WORDS)
    }
}

impl DocumentFilter for KeepLargestBlockFilter {
    fn name(&self) -> &'static str {
        "KeepLargestBlockFilter"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let blocks = &mut doc.blocks;
        if blocks.len() < 2 {
            return Ok(false);
        }

        let mut largest: Option<usize> = None;
        for (i, block) in blocks.iter().enumerate() {
            if !block.is_content() {
                continue;
            }
            let is_larger = largest.map_or(true, |l| block.num_words() > blocks[l].num_words());
            if is_larger {
                largest = Some(i);
            }
        }
        let largest = largest.filter(|&l| blocks[l].num_words() >= self.min_words);

        for (i, block) in blocks.iter_mut().enumerate() {
            if Some(i) == largest {
                block.set_is_content(true);
                block.add_label(Label::VeryLikelyContent);
            } else {
                block.set_is_content(false);
                block.add_label(Label::MightBeContent);
            }
        }

        if let (true, Some(n)) = (self.expand_to_same_tag_level, largest) {
            let level = blocks[n].tag_level();
            trace!(index = n, level, num_words = blocks[n].num_words(), "largest block");

            for block in blocks[..n].iter_mut().rev() {
                if !self.is_sibling(block, level) {
                    break;
                }
                block.set_is_content(true);
            }
            for block in &mut blocks[n + 1..] {
                if !self.is_sibling(block, level) {
                    break;
                }
                block.set_is_content(true);
            }
        }

        Ok(true)
    }
}

/// Promotes large non-content blocks at the tag level of the main content.
///
/// The tag level is taken from the first content block labeled
/// [`Label::VeryLikelyContent`]; without one, nothing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargeBlockSameTagLevelToContentFilter {
    min_words: usize,
}

impl LargeBlockSameTagLevelToContentFilter {
    #[must_use]
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }
}

impl Default for LargeBlockSameTagLevelToContentFilter {
    fn default() -> Self {
        Self::new(DEFAULT_LARGE_BLOCK_MIN_WORDS)
    }
}

impl DocumentFilter for LargeBlockSameTagLevelToContentFilter {
    fn name(&self) -> &'static str {
        "LargeBlockSameTagLevelToContentFilter"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let Some(level) = doc
            .blocks
            .iter()
            .find(|b| b.is_content() && b.has_label(&Label::VeryLikelyContent))
            .map(|b| b.tag_level())
        else {
            return Ok(false);
        };

        let mut changes = false;
        for block in &mut doc.blocks {
            if !block.is_content() && block.num_words() >= self.min_words && block.tag_level() == level {
                block.set_is_content(true);
                changes = true;
            }
        }
        Ok(changes)
    }
}
