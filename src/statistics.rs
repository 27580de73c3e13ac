//! Document statistics and extraction quality estimation.
//!
//! Comparing the statistics of a document before and after extraction gives a
//! cheap hint whether the chain found a real article, useful for deciding
//! whether to retry with another chain.

use crate::document::TextDocument;

/// Word and block counts of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextDocumentStatistics {
    num_words: usize,
    num_blocks: usize,
}

impl TextDocumentStatistics {
    /// Computes statistics over all blocks, or over content blocks only.
    #[must_use]
    pub fn new(doc: &TextDocument, content_only: bool) -> Self {
        doc.blocks
            .iter()
            .filter(|b| !content_only || b.is_content())
            .fold(Self::default(), |stats, b| Self {
                num_words: stats.num_words + b.num_words(),
                num_blocks: stats.num_blocks + 1,
            })
    }

    #[must_use]
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    #[must_use]
    pub fn num_blocks(&self) -> usize {
        self.num_blocks
    }

    /// Average words per block; `0.0` for an empty selection.
    #[must_use]
    pub fn avg_num_words(&self) -> f64 {
        if self.num_blocks == 0 {
            0.0
        } else {
            self.num_words as f64 / self.num_blocks as f64
        }
    }
}

/// Threshold-based extraction quality estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleEstimator {
    /// Documents with fewer words than this before extraction are low quality.
    pub min_words_before: usize,
    /// Extractions with fewer content words than this are low quality.
    pub min_words_after: usize,
    /// Extractions whose content blocks average fewer words than this are low quality.
    pub min_avg_words_after: f64,
}

impl Default for SimpleEstimator {
    fn default() -> Self {
        Self {
            min_words_before: 90,
            min_words_after: 70,
            min_avg_words_after: 25.0,
        }
    }
}

impl SimpleEstimator {
    /// Whether the extraction summarized by `before` (all blocks) and `after`
    /// (content blocks) is likely to be poor.
    #[must_use]
    pub fn is_low_quality(&self, before: &TextDocumentStatistics, after: &TextDocumentStatistics) -> bool {
        before.num_words() < self.min_words_before
            || after.num_words() < self.min_words_after
            || after.avg_num_words() < self.min_avg_words_after
    }
}
