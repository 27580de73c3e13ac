//! Filters that clean up the end of a document.

use tracing::trace;

use crate::document::TextDocument;
use crate::error::Result;
use crate::labels::Label;

use super::DocumentFilter;

/// Default content word count after which an end-of-text marker takes effect.
pub const DEFAULT_MIN_WORDS_AFTER_CONTENT: usize = 60;

/// Marks the end of a document as boilerplate, starting at the first
/// end-of-text block with enough content before it.
///
/// Content words are counted over the blocks *before* the one being looked at.
/// A block labeled [`Label::IndicatesEndOfText`] opens the terminal region only
/// if that count is strictly greater than `min_num_words`; from then on every
/// block is non-content. Labeled blocks with too little content before them
/// are passed over, so a later block of the same region can still take the
/// cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreBlocksAfterContentFilter {
    min_num_words: usize,
}

impl IgnoreBlocksAfterContentFilter {
    #[must_use]
    pub fn new(min_num_words: usize) -> Self {
        Self { min_num_words }
    }

    #[must_use]
    pub fn min_num_words(&self) -> usize {
        self.min_num_words
    }
}

impl Default for IgnoreBlocksAfterContentFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORDS_AFTER_CONTENT)
    }
}

impl DocumentFilter for IgnoreBlocksAfterContentFilter {
    fn name(&self) -> &'static str {
        "IgnoreBlocksAfterContentFilter"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        let mut num_words = 0;
        let mut found_end_of_text = false;

        for block in &mut doc.blocks {
            if !found_end_of_text
                && block.has_label(&Label::IndicatesEndOfText)
                && num_words > self.min_num_words
            {
                trace!(offset = block.offset_start(), num_words, "terminal region starts");
                found_end_of_text = true;
            }

            if found_end_of_text {
                changes |= block.set_is_content(false);
            } else if block.is_content() {
                num_words += block.num_words();
            }
        }

        Ok(changes)
    }
}

/// Demotes headings left dangling at the end of the content.
///
/// Walking backwards, every content block carrying [`Label::Heading`] becomes
/// boilerplate, up to the last content block that is not a heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrailingHeadlineToBoilerplateFilter;

impl TrailingHeadlineToBoilerplateFilter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentFilter for TrailingHeadlineToBoilerplateFilter {
    fn name(&self) -> &'static str {
        "TrailingHeadlineToBoilerplateFilter"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;

        for block in doc.blocks.iter_mut().rev() {
            if !block.is_content() {
                continue;
            }
            if !block.has_label(&Label::Heading) {
                break;
            }
            block.set_is_content(false);
            changes = true;
        }

        Ok(changes)
    }
}
