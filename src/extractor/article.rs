//! The canonical chain for news articles.

use std::sync::LazyLock;

use crate::document::TextDocument;
use crate::error::Result;
use crate::filters::{
    BlockProximityFusion, BoilerplateBlockFilter, DocumentFilter, DocumentTitleMatchClassifier,
    ExpandTitleToContentFilter, IgnoreBlocksAfterContentFilter, KeepLargestBlockFilter,
    LargeBlockSameTagLevelToContentFilter, ListAtEndFilter, NumWordsRulesClassifier,
    TerminatingBlocksFinder, TrailingHeadlineToBoilerplateFilter,
};
use crate::labels::Label;
use crate::options::Options;
use crate::statistics::SimpleEstimator;

use super::chain::{ChainOutcome, FilterChain};

static INSTANCE: LazyLock<ArticleExtractor> = LazyLock::new(ArticleExtractor::default);

/// Full-text extractor tuned for news articles.
///
/// Runs, in this order:
///
/// 1. [`TerminatingBlocksFinder`]
/// 2. [`DocumentTitleMatchClassifier`] on the document's own title
/// 3. [`NumWordsRulesClassifier`]
/// 4. [`IgnoreBlocksAfterContentFilter`] (60 words)
/// 5. [`TrailingHeadlineToBoilerplateFilter`]
/// 6. [`BlockProximityFusion`] (gap 1, any predecessor)
/// 7. [`BoilerplateBlockFilter`] for [`Label::Title`]
/// 8. [`BlockProximityFusion`] (gap 1, content and labeled blocks only)
/// 9. [`KeepLargestBlockFilter`] (expanding to the same tag level, 150 words)
/// 10. [`ExpandTitleToContentFilter`]
/// 11. [`LargeBlockSameTagLevelToContentFilter`]
/// 12. [`ListAtEndFilter`]
///
/// # Example
///
/// ```rust
/// use boilerplate_rs::{ArticleExtractor, TextBlock, TextDocument};
///
/// let mut doc = TextDocument::new(
///     Some("Harbour reopens - Daily Bugle".to_string()),
///     vec![
///         TextBlock::from_text("Home News Sport", 0, 2).fully_linked(),
///         TextBlock::from_text("word ".repeat(200), 3, 3),
///     ],
/// );
/// let changed = ArticleExtractor::instance().process(&mut doc)?;
/// assert!(changed);
/// assert!(!doc.blocks[0].is_content());
/// assert!(doc.blocks[1].is_content());
/// # Ok::<(), boilerplate_rs::ExtractionError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleExtractor {
    chain: FilterChain,
}

impl ArticleExtractor {
    /// Shared extractor with the default options.
    #[must_use]
    pub fn instance() -> &'static ArticleExtractor {
        &INSTANCE
    }

    /// Builds the chain with the thresholds from `options`.
    #[must_use]
    pub fn with_options(options: &Options) -> Self {
        let chain = FilterChain::default()
            .then(TerminatingBlocksFinder)
            .then(DocumentTitleMatchClassifier::from_document().require_title(options.require_title))
            .then(NumWordsRulesClassifier::new(options.classifier))
            .then(IgnoreBlocksAfterContentFilter::new(options.min_words_after_content))
            .then(TrailingHeadlineToBoilerplateFilter)
            .then(BlockProximityFusion::new(options.fusion_max_blocks_distance, false, false))
            .then(BoilerplateBlockFilter::new(Label::Title))
            .then(BlockProximityFusion::new(options.fusion_max_blocks_distance, true, true))
            .then(KeepLargestBlockFilter::new(
                options.expand_to_same_tag_level,
                options.largest_block_min_words,
            ))
            .then(ExpandTitleToContentFilter)
            .then(LargeBlockSameTagLevelToContentFilter::new(options.large_block_min_words))
            .then(ListAtEndFilter);

        Self { chain }
    }

    #[must_use]
    pub fn chain(&self) -> &FilterChain {
        &self.chain
    }

    /// Runs the chain on `doc`; returns `true` if any filter changed it.
    pub fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        self.chain.process(doc)
    }

    /// Runs the chain and estimates the extraction quality with the default estimator.
    pub fn process_with_estimate(&self, doc: &mut TextDocument) -> Result<ChainOutcome> {
        self.chain.process_with_estimate(doc, &SimpleEstimator::default())
    }
}

impl Default for ArticleExtractor {
    fn default() -> Self {
        Self::with_options(&Options::default())
    }
}

impl DocumentFilter for ArticleExtractor {
    fn name(&self) -> &'static str {
        "ArticleExtractor"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        self.chain.process(doc)
    }
}

impl From<ArticleExtractor> for FilterChain {
    fn from(extractor: ArticleExtractor) -> Self {
        extractor.chain
    }
}
