//! Error types for boilerplate-rs.
//!
//! Every filter failure is reported through [`ExtractionError`]. A failure
//! aborts the rest of the chain; blocks already mutated are not restored.

/// Error type for filter and chain operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    /// A block starts at or before the end of the block preceding it.
    #[error("Overlapping blocks: block starting at {start} overlaps previous block ending at {previous_end}")]
    OverlappingBlocks {
        /// `offset_end` of the preceding block.
        previous_end: usize,
        /// `offset_start` of the offending block.
        start: usize,
    },

    /// A block carries internally inconsistent features.
    #[error("Invalid block at index {index}: {reason}")]
    InvalidBlock {
        /// Position of the block in the document.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A title-dependent filter was configured to require a title, but the document has none.
    #[error("{filter} requires a document title, but none was given")]
    MissingTitle {
        /// Name of the filter that needed the title.
        filter: &'static str,
    },

    /// General filter failure.
    #[error("Filter failed: {0}")]
    Filter(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
