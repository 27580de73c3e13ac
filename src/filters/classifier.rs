//! The primary statistical content classifier.

use crate::document::{TextBlock, TextDocument};
use crate::error::Result;

use super::DocumentFilter;

/// Thresholds of the word-count / link-density decision tree.
///
/// The defaults were fitted on news articles; every later filter only refines
/// the verdicts produced with them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumWordsRules {
    /// Blocks denser in links than this are boilerplate.
    pub max_link_density: f64,
    /// Link density of the previous block that switches to the "after links" branch.
    pub max_prev_link_density: f64,
    /// A block with more words than this is content (after plain text).
    pub short_block_words: usize,
    /// A short block followed by more words than this is content (after plain text).
    pub short_next_words: usize,
    /// A short block between short blocks is content only if the previous block
    /// has more words than this.
    pub short_prev_words: usize,
    /// A block with more words than this is content (after a link-heavy block).
    pub after_links_block_words: usize,
    /// A block followed by more words than this is content (after a link-heavy block).
    pub after_links_next_words: usize,
}

impl Default for NumWordsRules {
    fn default() -> Self {
        Self {
            max_link_density: 0.333_333,
            max_prev_link_density: 0.555_556,
            short_block_words: 16,
            short_next_words: 15,
            short_prev_words: 4,
            after_links_block_words: 40,
            after_links_next_words: 17,
        }
    }
}

/// The features of a neighbour the decision tree looks at.
///
/// Missing neighbours (before the first / after the last block) are empty.
#[derive(Debug, Clone, Copy, Default)]
struct Neighbour {
    num_words: usize,
    link_density: f64,
}

impl From<&TextBlock> for Neighbour {
    fn from(block: &TextBlock) -> Self {
        Self {
            num_words: block.num_words(),
            link_density: block.link_density(),
        }
    }
}

impl NumWordsRules {
    fn is_content(&self, prev: Neighbour, curr: Neighbour, next: Neighbour) -> bool {
        if curr.link_density > self.max_link_density {
            return false;
        }

        if prev.link_density <= self.max_prev_link_density {
            curr.num_words > self.short_block_words
                || next.num_words > self.short_next_words
                || prev.num_words > self.short_prev_words
        } else {
            curr.num_words > self.after_links_block_words
                || next.num_words > self.after_links_next_words
        }
    }
}

/// Sets every block's initial content verdict from its own word count and link
/// density and those of its direct neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumWordsRulesClassifier {
    rules: NumWordsRules,
}

impl NumWordsRulesClassifier {
    #[must_use]
    pub fn new(rules: NumWordsRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &NumWordsRules {
        &self.rules
    }
}

impl DocumentFilter for NumWordsRulesClassifier {
    fn name(&self) -> &'static str {
        "NumWordsRulesClassifier"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        // Features are read before any verdict is written; the tree never looks
        // at a neighbour's verdict.
        let features: Vec<Neighbour> = doc.blocks.iter().map(Neighbour::from).collect();

        let mut changes = false;
        for (i, block) in doc.blocks.iter_mut().enumerate() {
            let prev = i.checked_sub(1).map(|p| features[p]).unwrap_or_default();
            let next = features.get(i + 1).copied().unwrap_or_default();
            let verdict = self.rules.is_content(prev, features[i], next);
            changes |= block.set_is_content(verdict);
        }
        Ok(changes)
    }
}
