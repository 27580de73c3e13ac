//! End-of-text marker detection.

use tracing::trace;

use crate::document::TextDocument;
use crate::error::Result;
use crate::labels::Label;
use crate::patterns::{
    COMMENT_COUNT, END_OF_TEXT_CLOSED_FEEDBACK, END_OF_TEXT_FRAGMENTS, END_OF_TEXT_PREFIXES,
};

use super::DocumentFilter;

/// Blocks with this many words or more are never end-of-text markers.
const MAX_MARKER_WORDS: usize = 15;

/// Markers shorter than this (in chars) are only accepted as a bare "Comment" link.
const MIN_MARKER_CHARS: usize = 8;

/// Finds short blocks that conventionally open a comment or related-links
/// section, and labels the marker and every block after it with
/// [`Label::IndicatesEndOfText`].
///
/// [`IgnoreBlocksAfterContentFilter`] cuts the document at the first labeled
/// block preceded by enough content, so a marker that comes too early still
/// lets a later block of the terminal region take the cut.
///
/// A fully-linked block reading exactly `Comment` opens the terminal region
/// too, but labeling that region alone does not count as a change; only
/// textual markers do.
///
/// [`IgnoreBlocksAfterContentFilter`]: super::IgnoreBlocksAfterContentFilter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminatingBlocksFinder;

impl TerminatingBlocksFinder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Whether lower-cased, trimmed block text opens a terminal section.
fn is_end_of_text(text_lc: &str) -> bool {
    END_OF_TEXT_PREFIXES.iter().any(|p| text_lc.starts_with(p))
        || COMMENT_COUNT.is_match(text_lc)
        || END_OF_TEXT_FRAGMENTS.iter().any(|f| text_lc.contains(f))
        || text_lc == END_OF_TEXT_CLOSED_FEEDBACK
}

impl DocumentFilter for TerminatingBlocksFinder {
    fn name(&self) -> &'static str {
        "TerminatingBlocksFinder"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        let mut in_terminal_region = false;

        for block in &mut doc.blocks {
            if block.num_words() < MAX_MARKER_WORDS {
                let text = block.text().trim();

                if text.chars().count() >= MIN_MARKER_CHARS {
                    if is_end_of_text(&text.to_lowercase()) {
                        trace!(offset = block.offset_start(), "end-of-text marker");
                        block.add_label(Label::IndicatesEndOfText);
                        changes = true;
                        in_terminal_region = true;
                        continue;
                    }
                } else if block.link_density() == 1.0 && text == "Comment" {
                    block.add_label(Label::IndicatesEndOfText);
                    in_terminal_region = true;
                    continue;
                }
            }

            if in_terminal_region {
                block.add_label(Label::IndicatesEndOfText);
            }
        }

        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextBlock;

    fn run(texts: &[&str]) -> (bool, TextDocument) {
        let blocks = texts
            .iter()
            .enumerate()
            .map(|(i, t)| TextBlock::from_text(*t, i, 1))
            .collect();
        let mut doc = TextDocument::new(None, blocks);
        let changed = TerminatingBlocksFinder.process(&mut doc).unwrap();
        (changed, doc)
    }

    fn is_marked(doc: &TextDocument, i: usize) -> bool {
        doc.blocks[i].has_label(&Label::IndicatesEndOfText)
    }

    #[test]
    fn test_labels_comment_section_headers() {
        let (changed, doc) = run(&[
            "The storm closed every road along the coast.",
            "Comments (12)",
            "42 comments so far",
            "Have your say on this story",
            "Related articles",
            "Thanks for your comments - this feedback is now closed",
        ]);
        assert!(changed);
        assert!(!is_marked(&doc, 0));
        for i in 1..=5 {
            assert!(is_marked(&doc, i), "block {i} should be marked");
        }
    }

    #[test]
    fn test_blocks_after_marker_are_labeled() {
        let mut doc = TextDocument::new(
            None,
            vec![
                TextBlock::from_text(vec!["body"; 50].join(" "), 0, 1),
                TextBlock::from_text("Comments (3)", 1, 1),
                TextBlock::from_text(vec!["reply"; 30].join(" "), 2, 1),
            ],
        );
        assert!(TerminatingBlocksFinder.process(&mut doc).unwrap());
        let marked: Vec<bool> = (0..3).map(|i| is_marked(&doc, i)).collect();
        assert_eq!(marked, vec![false, true, true]);
    }

    #[test]
    fn test_region_after_linked_comment_is_labeled_silently() {
        let mut doc = TextDocument::new(
            None,
            vec![
                TextBlock::from_text("Story text", 0, 1),
                TextBlock::from_text("Comment", 1, 1).fully_linked(),
                TextBlock::from_text("First!", 2, 1),
            ],
        );
        assert!(!TerminatingBlocksFinder.process(&mut doc).unwrap());
        let marked: Vec<bool> = (0..3).map(|i| is_marked(&doc, i)).collect();
        assert_eq!(marked, vec![false, true, true]);
    }

    #[test]
    fn test_long_blocks_are_never_markers() {
        let long = "comments ".repeat(15);
        let (changed, doc) = run(&[long.trim()]);
        assert!(!changed);
        assert!(!is_marked(&doc, 0));
    }

    #[test]
    fn test_short_text_is_ignored() {
        let (changed, doc) = run(&["Add it"]);
        assert!(!changed);
        assert!(!is_marked(&doc, 0));
    }

    #[test]
    fn test_linked_comment_is_labeled_without_reporting_change() {
        let mut doc = TextDocument::new(None, vec![TextBlock::from_text("Comment", 0, 1).fully_linked()]);
        let changed = TerminatingBlocksFinder.process(&mut doc).unwrap();
        assert!(!changed);
        assert!(doc.blocks[0].has_label(&Label::IndicatesEndOfText));
    }

    #[test]
    fn test_unlinked_comment_is_not_labeled() {
        let (_, doc) = run(&["Comment"]);
        assert!(!is_marked(&doc, 0));
    }
}
