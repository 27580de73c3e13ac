//! Ordered filter chains.

use tracing::{debug, trace};

use crate::document::{TextBlock, TextDocument};
use crate::error::Result;
use crate::filters::{DocumentFilter, Filter};
use crate::statistics::{SimpleEstimator, TextDocumentStatistics};

/// What a chain run produced besides the mutated document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainOutcome {
    /// Whether any filter reported a change.
    pub changed: bool,
    /// Statistics of the whole document before the chain ran.
    pub before: TextDocumentStatistics,
    /// Statistics of the content blocks after the chain ran.
    pub after: TextDocumentStatistics,
    /// Verdict of the estimator on `before` / `after`.
    pub low_quality: bool,
}

/// An ordered list of filters, fixed at construction.
///
/// [`process`](Self::process) runs every filter, in order, on every call. A
/// filter reporting no change never causes later filters to be skipped,
/// because filters also leave labels for each other without reporting them.
/// The first error aborts the chain; changes made by earlier filters stay in
/// the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterChain {
    filters: Vec<Filter>,
}

impl FilterChain {
    #[must_use]
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters }
    }

    /// Appends a filter.
    #[must_use]
    pub fn then(mut self, filter: impl Into<Filter>) -> Self {
        self.filters.push(filter.into());
        self
    }

    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Runs all filters on `doc`; returns `true` if any of them changed it.
    pub fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changed = false;

        for filter in &self.filters {
            let filter_changed = filter.process(doc)?;
            debug!(
                filter = filter.name(),
                changed = filter_changed,
                blocks = doc.blocks.len(),
                "filter finished"
            );
            changed = changed || filter_changed;
        }

        trace!(
            content_blocks = doc.content_blocks().count(),
            content_words = doc.content_blocks().map(TextBlock::num_words).sum::<usize>(),
            changed,
            "chain finished"
        );
        Ok(changed)
    }

    /// Runs the chain and estimates the quality of the result with `estimator`.
    pub fn process_with_estimate(
        &self,
        doc: &mut TextDocument,
        estimator: &SimpleEstimator,
    ) -> Result<ChainOutcome> {
        let before = TextDocumentStatistics::new(doc, false);
        let changed = self.process(doc)?;
        let after = TextDocumentStatistics::new(doc, true);

        Ok(ChainOutcome {
            changed,
            before,
            after,
            low_quality: estimator.is_low_quality(&before, &after),
        })
    }
}

impl DocumentFilter for FilterChain {
    fn name(&self) -> &'static str {
        "FilterChain"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        FilterChain::process(self, doc)
    }
}

impl FromIterator<Filter> for FilterChain {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
