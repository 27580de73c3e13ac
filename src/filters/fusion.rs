//! Block-proximity fusion.

use tracing::trace;

use crate::document::{TextBlock, TextDocument};
use crate::error::{ExtractionError, Result};

use super::DocumentFilter;

/// Merges each content block into its predecessor when the two are at most
/// `max_blocks_distance` ordinal positions apart.
///
/// The gap between two blocks is `start - previous_end - 1`, so directly
/// adjacent blocks have a gap of 0. The predecessor may be boilerplate unless
/// `content_only` is set; the merged block is content either way. Further
/// switches restrict which pairs may fuse:
///
/// - `content_only`: both blocks must be content; scanning starts at the first
///   content block.
/// - `labels_only`: both blocks must carry at least one label.
/// - `same_tag_level_only`: both blocks must sit at the same tag level.
///
/// Fails with [`ExtractionError::OverlappingBlocks`] if a block starts at or
/// before the end of its predecessor, and with
/// [`ExtractionError::InvalidBlock`] for blocks with inconsistent features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct BlockProximityFusion {
    max_blocks_distance: usize,
    content_only: bool,
    labels_only: bool,
    same_tag_level_only: bool,
}

impl BlockProximityFusion {
    #[must_use]
    pub fn new(max_blocks_distance: usize, content_only: bool, labels_only: bool) -> Self {
        Self {
            max_blocks_distance,
            content_only,
            labels_only,
            same_tag_level_only: false,
        }
    }

    /// Only fuse blocks at the same tag level.
    #[must_use]
    pub fn same_tag_level_only(mut self, same_tag_level_only: bool) -> Self {
        self.same_tag_level_only = same_tag_level_only;
        self
    }

    fn may_fuse(&self, prev: &TextBlock, block: &TextBlock) -> bool {
        if self.content_only && !(prev.is_content() && block.is_content()) {
            return false;
        }
        if self.labels_only && (prev.labels().is_empty() || block.labels().is_empty()) {
            return false;
        }
        if self.same_tag_level_only && prev.tag_level() != block.tag_level() {
            return false;
        }
        true
    }
}

impl DocumentFilter for BlockProximityFusion {
    fn name(&self) -> &'static str {
        "BlockProximityFusion"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        if doc.blocks.len() < 2 {
            return Ok(false);
        }

        for (index, block) in doc.blocks.iter().enumerate() {
            block.validate(index)?;
        }
        for pair in doc.blocks.windows(2) {
            if pair[1].offset_start() <= pair[0].offset_end() {
                return Err(ExtractionError::OverlappingBlocks {
                    previous_end: pair[0].offset_end(),
                    start: pair[1].offset_start(),
                });
            }
        }

        let start = if self.content_only {
            match doc.blocks.iter().position(TextBlock::is_content) {
                Some(first_content) => first_content,
                None => return Ok(false),
            }
        } else {
            0
        };

        let mut blocks = std::mem::take(&mut doc.blocks).into_iter();
        let mut fused: Vec<TextBlock> = blocks.by_ref().take(start + 1).collect();
        let mut changes = false;

        for block in blocks {
            if !block.is_content() {
                fused.push(block);
                continue;
            }
            let Some(prev) = fused.last_mut() else {
                fused.push(block);
                continue;
            };

            let gap = block.offset_start() - prev.offset_end() - 1;
            if gap <= self.max_blocks_distance && self.may_fuse(prev, &block) {
                trace!(
                    into = prev.offset_start(),
                    from = block.offset_start(),
                    gap,
                    "fusing blocks"
                );
                prev.merge_next(block);
                changes = true;
            } else {
                fused.push(block);
            }
        }

        doc.blocks = fused;
        Ok(changes)
    }
}
