//! Filter chains.
//!
//! # Module Structure
//!
//! - `chain`: [`FilterChain`], an ordered list of filters run unconditionally
//! - `article`: [`ArticleExtractor`], the canonical chain for news articles
//!
//! # Usage
//!
//! ```rust
//! use boilerplate_rs::extractor::FilterChain;
//! use boilerplate_rs::filters::{
//!     BlockProximityFusion, KeepLargestBlockFilter, NumWordsRulesClassifier,
//! };
//! use boilerplate_rs::TextDocument;
//!
//! // Assemble a custom chain from the same filters
//! let chain = FilterChain::default()
//!     .then(NumWordsRulesClassifier::default())
//!     .then(BlockProximityFusion::new(1, true, false))
//!     .then(KeepLargestBlockFilter::new(false, 150));
//!
//! let mut doc = TextDocument::default();
//! let changed = chain.process(&mut doc)?;
//! assert!(!changed);
//! # Ok::<(), boilerplate_rs::ExtractionError>(())
//! ```

pub mod article;
pub mod chain;

pub use article::ArticleExtractor;
pub use chain::{ChainOutcome, FilterChain};
