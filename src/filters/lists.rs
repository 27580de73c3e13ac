//! Lists following the main content.

use crate::document::TextDocument;
use crate::error::Result;
use crate::labels::Label;

use super::DocumentFilter;

/// Decides the fate of list items ([`Label::Li`]) after the main content.
///
/// A run of link-free list items directly following a
/// [`Label::VeryLikelyContent`] block, nested deeper than it and labeled
/// [`Label::MightBeContent`], is part of the article and becomes content. Any
/// other list item past the end of the content region ("see also",
/// navigation) becomes boilerplate. The content region ends with the last
/// content block that is not itself a list item, so lists between two
/// paragraphs of the article keep their verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListAtEndFilter;

impl ListAtEndFilter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentFilter for ListAtEndFilter {
    fn name(&self) -> &'static str {
        "ListAtEndFilter"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let Some(main_start) = doc
            .blocks
            .iter()
            .position(|b| b.is_content() && b.has_label(&Label::VeryLikelyContent))
        else {
            return Ok(false);
        };
        let content_end = doc
            .blocks
            .iter()
            .rposition(|b| b.is_content() && !b.has_label(&Label::Li))
            .map_or(main_start, |end| end.max(main_start));

        let mut changes = false;
        // Tag level of the main block while the list run directly after it continues.
        let mut run_level: Option<usize> = None;

        for (i, block) in doc.blocks.iter_mut().enumerate().skip(main_start) {
            if block.is_content() && block.has_label(&Label::VeryLikelyContent) {
                run_level = Some(block.tag_level());
                continue;
            }

            let continues_run = run_level.is_some_and(|level| block.tag_level() > level)
                && block.has_label(&Label::MightBeContent)
                && block.has_label(&Label::Li)
                && block.link_density() == 0.0;

            if continues_run {
                changes |= block.set_is_content(true);
            } else {
                run_level = None;
                if i > content_end && block.has_label(&Label::Li) {
                    changes |= block.set_is_content(false);
                }
            }
        }

        Ok(changes)
    }
}
