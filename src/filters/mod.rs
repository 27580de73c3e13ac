//! Document filters.
//!
//! Every filter implements [`DocumentFilter`]: it inspects and mutates a
//! [`TextDocument`] in place and reports whether it changed anything. Filters
//! are immutable configuration once built, so one instance can process many
//! documents, also from several threads at once.
//!
//! # Module Structure
//!
//! - `terminating`: end-of-text marker detection
//! - `title`: title matching and title expansion
//! - `classifier`: the word-count / link-density decision tree
//! - `trailing`: terminal region and dangling headline cleanup
//! - `fusion`: block-proximity fusion
//! - `boilerplate`: removal of boilerplate blocks
//! - `largest`: largest-block selection and same-level promotion
//! - `lists`: lists after the main content
//!
//! [`Filter`] is the closed set of these kinds, which is what
//! [`FilterChain`](crate::extractor::FilterChain) stores.

use crate::document::TextDocument;
use crate::error::Result;

pub mod boilerplate;
pub mod classifier;
pub mod fusion;
pub mod largest;
pub mod lists;
pub mod terminating;
pub mod title;
pub mod trailing;

pub use boilerplate::BoilerplateBlockFilter;
pub use classifier::{NumWordsRules, NumWordsRulesClassifier};
pub use fusion::BlockProximityFusion;
pub use largest::{KeepLargestBlockFilter, LargeBlockSameTagLevelToContentFilter};
pub use lists::ListAtEndFilter;
pub use terminating::TerminatingBlocksFinder;
pub use title::{DocumentTitleMatchClassifier, ExpandTitleToContentFilter, TitleSource};
pub use trailing::{IgnoreBlocksAfterContentFilter, TrailingHeadlineToBoilerplateFilter};

/// A unit of work over a document.
pub trait DocumentFilter {
    /// Name used in log events.
    fn name(&self) -> &'static str;

    /// Processes `doc` in place.
    ///
    /// Returns `Ok(true)` if the filter changed the document. Some filters also
    /// set labels without reporting a change.
    fn process(&self, doc: &mut TextDocument) -> Result<bool>;
}

/// Any of the known filters.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    TerminatingBlocks(TerminatingBlocksFinder),
    TitleMatch(DocumentTitleMatchClassifier),
    NumWordsRules(NumWordsRulesClassifier),
    IgnoreBlocksAfterContent(IgnoreBlocksAfterContentFilter),
    TrailingHeadlineToBoilerplate(TrailingHeadlineToBoilerplateFilter),
    BlockProximityFusion(BlockProximityFusion),
    BoilerplateBlock(BoilerplateBlockFilter),
    KeepLargestBlock(KeepLargestBlockFilter),
    ExpandTitleToContent(ExpandTitleToContentFilter),
    LargeBlockSameTagLevelToContent(LargeBlockSameTagLevelToContentFilter),
    ListAtEnd(ListAtEndFilter),
}

impl Filter {
    fn as_dyn(&self) -> &dyn DocumentFilter {
        match self {
            Self::TerminatingBlocks(f) => f,
            Self::TitleMatch(f) => f,
            Self::NumWordsRules(f) => f,
            Self::IgnoreBlocksAfterContent(f) => f,
            Self::TrailingHeadlineToBoilerplate(f) => f,
            Self::BlockProximityFusion(f) => f,
            Self::BoilerplateBlock(f) => f,
            Self::KeepLargestBlock(f) => f,
            Self::ExpandTitleToContent(f) => f,
            Self::LargeBlockSameTagLevelToContent(f) => f,
            Self::ListAtEnd(f) => f,
        }
    }
}

impl DocumentFilter for Filter {
    fn name(&self) -> &'static str {
        self.as_dyn().name()
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        self.as_dyn().process(doc)
    }
}

macro_rules! impl_from_filter {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Filter {
                fn from(filter: $ty) -> Self {
                    Self::$variant(filter)
                }
            }
        )*
    };
}

impl_from_filter! {
    TerminatingBlocks => TerminatingBlocksFinder,
    TitleMatch => DocumentTitleMatchClassifier,
    NumWordsRules => NumWordsRulesClassifier,
    IgnoreBlocksAfterContent => IgnoreBlocksAfterContentFilter,
    TrailingHeadlineToBoilerplate => TrailingHeadlineToBoilerplateFilter,
    BlockProximityFusion => BlockProximityFusion,
    BoilerplateBlock => BoilerplateBlockFilter,
    KeepLargestBlock => KeepLargestBlockFilter,
    ExpandTitleToContent => ExpandTitleToContentFilter,
    LargeBlockSameTagLevelToContent => LargeBlockSameTagLevelToContentFilter,
    ListAtEnd => ListAtEndFilter,
}
