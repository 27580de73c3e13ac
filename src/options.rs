//! Configuration options for the article extraction chain.
//!
//! The `Options` struct holds every tunable threshold of
//! [`ArticleExtractor`](crate::ArticleExtractor). The defaults reproduce the
//! canonical news-article chain.

use crate::filters::largest::{DEFAULT_LARGEST_BLOCK_MIN_WORDS, DEFAULT_LARGE_BLOCK_MIN_WORDS};
use crate::filters::trailing::DEFAULT_MIN_WORDS_AFTER_CONTENT;
use crate::filters::NumWordsRules;

/// Configuration options for the article extraction chain.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the canonical chain.
///
/// # Example
///
/// ```rust
/// use boilerplate_rs::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_words_after_content: 100,
///     require_title: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Content words that must precede an end-of-text marker before it cuts
    /// off the rest of the document.
    ///
    /// The count must be strictly greater than this value.
    ///
    /// Default: `60`
    pub min_words_after_content: usize,

    /// Maximum gap (in ordinal positions) bridged by both fusion passes.
    ///
    /// Default: `1`
    pub fusion_max_blocks_distance: usize,

    /// Restore large blocks at the tag level of the largest block.
    ///
    /// Default: `true`
    pub expand_to_same_tag_level: bool,

    /// Minimum words for a same-level sibling of the largest block to be restored.
    ///
    /// Default: `150`
    pub largest_block_min_words: usize,

    /// Minimum words for a non-content block at the main content's tag level
    /// to be promoted late in the chain.
    ///
    /// Default: `100`
    pub large_block_min_words: usize,

    /// Fail instead of skipping title matching when the document has no title.
    ///
    /// Default: `false`
    pub require_title: bool,

    /// Thresholds of the initial word-count / link-density classifier.
    pub classifier: NumWordsRules,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_words_after_content: DEFAULT_MIN_WORDS_AFTER_CONTENT,
            fusion_max_blocks_distance: 1,
            expand_to_same_tag_level: true,
            largest_block_min_words: DEFAULT_LARGEST_BLOCK_MIN_WORDS,
            large_block_min_words: DEFAULT_LARGE_BLOCK_MIN_WORDS,
            require_title: false,
            classifier: NumWordsRules::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.min_words_after_content, 60);
        assert_eq!(opts.fusion_max_blocks_distance, 1);
        assert!(opts.expand_to_same_tag_level);
        assert_eq!(opts.largest_block_min_words, 150);
        assert_eq!(opts.large_block_min_words, 100);
        assert!(!opts.require_title);
        assert!((opts.classifier.max_link_density - 0.333_333).abs() < f64::EPSILON);
        assert_eq!(opts.classifier.short_block_words, 16);
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            min_words_after_content: 100,
            classifier: NumWordsRules {
                after_links_block_words: 30,
                ..NumWordsRules::default()
            },
            ..Options::default()
        };

        assert_eq!(opts.min_words_after_content, 100);
        assert_eq!(opts.classifier.after_links_block_words, 30);
        assert_eq!(opts.classifier.after_links_next_words, 17);
        assert_eq!(opts.largest_block_min_words, 150);
    }
}
