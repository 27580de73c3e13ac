//! # boilerplate-rs
//!
//! Block-level boilerplate removal based on shallow text features.
//!
//! A page is handed over as a [`TextDocument`]: an ordered sequence of
//! [`TextBlock`]s (runs of text with word counts, link density, tag level and
//! ordinal offsets) plus the page title. A chain of heuristic filters then
//! labels, merges and classifies the blocks, leaving every block flagged as
//! content or boilerplate.
//!
//! ## Quick Start
//!
//! ```rust
//! use boilerplate_rs::{extract, TextBlock, TextDocument};
//!
//! let mut doc = TextDocument::new(
//!     Some("Harbour reopens".to_string()),
//!     vec![
//!         TextBlock::from_text("Home News Sport Weather", 0, 2).fully_linked(),
//!         TextBlock::from_text("Harbour reopens", 3, 3),
//!         TextBlock::from_text("word ".repeat(180), 4, 3),
//!     ],
//! );
//!
//! extract(&mut doc)?;
//! println!("{}", doc.content());
//! # Ok::<(), boilerplate_rs::ExtractionError>(())
//! ```
//!
//! ## Features
//!
//! - **Canonical chain**: [`ArticleExtractor`] reproduces the news-article filter order
//! - **Composable**: build other chains from the same filters with [`FilterChain`]
//! - **Labels**: filters signal each other through an open [`Label`] set
//! - **Configurable**: every threshold is in [`Options`]
//!
//! Converting HTML into blocks is left to the caller.

mod error;
mod labels;
mod options;
mod patterns;

/// Block and document model.
pub mod document;

/// The individual heuristic filters.
pub mod filters;

/// Filter chains, including the canonical article chain.
pub mod extractor;

/// Document statistics and extraction quality estimation.
pub mod statistics;

// Public API - re-exports
pub use document::{TextBlock, TextDocument};
pub use error::{ExtractionError, Result};
pub use extractor::{ArticleExtractor, ChainOutcome, FilterChain};
pub use filters::{DocumentFilter, Filter};
pub use labels::Label;
pub use options::Options;

/// Runs the canonical article chain on `doc`.
///
/// Returns `Ok(true)` if any filter changed the document. On error the
/// document is left partially processed and should be discarded.
pub fn extract(doc: &mut TextDocument) -> Result<bool> {
    ArticleExtractor::instance().process(doc)
}

/// Runs the article chain built from `options` on `doc`.
///
/// # Example
///
/// ```rust
/// use boilerplate_rs::{extract_with_options, Options, TextDocument};
///
/// let options = Options {
///     require_title: true,
///     ..Options::default()
/// };
/// let mut doc = TextDocument::default();
/// assert!(extract_with_options(&mut doc, &options).is_err());
/// ```
pub fn extract_with_options(doc: &mut TextDocument, options: &Options) -> Result<bool> {
    ArticleExtractor::with_options(options).process(doc)
}
