//! Removal of boilerplate blocks.

use crate::document::TextDocument;
use crate::error::Result;
use crate::labels::Label;

use super::DocumentFilter;

/// Removes non-content blocks from the document.
///
/// With a target label only the non-content blocks carrying that label are
/// removed (e.g. title candidates that did not make it into the content);
/// without one, every non-content block goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoilerplateBlockFilter {
    target: Option<Label>,
}

impl BoilerplateBlockFilter {
    /// Removes non-content blocks labeled `target`.
    #[must_use]
    pub fn new(target: Label) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Removes every non-content block.
    #[must_use]
    pub fn all() -> Self {
        Self { target: None }
    }

    #[must_use]
    pub fn target(&self) -> Option<&Label> {
        self.target.as_ref()
    }
}

impl DocumentFilter for BoilerplateBlockFilter {
    fn name(&self) -> &'static str {
        "BoilerplateBlockFilter"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let before = doc.blocks.len();
        doc.blocks.retain(|block| {
            block.is_content()
                || self
                    .target
                    .as_ref()
                    .is_some_and(|label| !block.has_label(label))
        });
        Ok(doc.blocks.len() != before)
    }
}
