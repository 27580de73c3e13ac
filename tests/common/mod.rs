//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use boilerplate_rs::{Label, TextBlock, TextDocument};

/// `n` space-separated words, optionally prefixed to tell blocks apart.
pub fn words(prefix: &str, n: usize) -> String {
    (0..n)
        .map(|i| format!("{prefix}{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A news page with navigation, a headline, a two-part body, a dangling
/// headline, a "Have your say" marker and a related-articles link list.
///
/// | index | block                     | words | offset | notes             |
/// |-------|---------------------------|-------|--------|-------------------|
/// | 0     | navigation list           | 5     | 0      | fully linked, li  |
/// | 1     | headline (matches title)  | 4     | 3      | heading           |
/// | 2     | body, first fragment      | 100   | 4      |                   |
/// | 3     | body, second fragment     | 100   | 6      | gap of 1          |
/// | 4     | "Latest Weather Updates"  | 3     | 7      | heading           |
/// | 5     | "Have your say"           | 3     | 8      | end-of-text       |
/// | 6     | related articles list     | 10    | 9      | fully linked, li  |
pub fn news_page() -> TextDocument {
    TextDocument::new(
        Some("Storm Closes Coastal Roads - Daily Bugle".to_string()),
        vec![
            TextBlock::from_text("Home News Sport Weather Contact", 0, 3)
                .fully_linked()
                .with_label(Label::Li),
            TextBlock::from_text("Storm Closes Coastal Roads", 3, 3)
                .with_label(Label::Heading)
                .with_label(Label::H1),
            TextBlock::from_text(words("first", 100), 4, 3),
            TextBlock::from_text(words("second", 100), 6, 3),
            TextBlock::from_text("Latest Weather Updates", 7, 3).with_label(Label::Heading),
            TextBlock::from_text("Have your say", 8, 3),
            TextBlock::from_text(
                "Related articles Flood warnings lifted as bridge closures continue inland",
                9,
                3,
            )
            .fully_linked()
            .with_label(Label::Li),
        ],
    )
}

/// A headline the classifier leaves out (it sits between short blocks),
/// a byline and a body, all directly adjacent.
pub fn unclassified_headline_page() -> TextDocument {
    TextDocument::new(
        Some("Storm Closes Coastal Roads".to_string()),
        vec![
            TextBlock::from_text("Storm Closes Coastal Roads", 0, 3),
            TextBlock::from_text("By Staff Reporter", 1, 3),
            TextBlock::from_text(words("body", 180), 2, 3),
        ],
    )
}

pub fn verdicts(doc: &TextDocument) -> Vec<bool> {
    doc.blocks.iter().map(TextBlock::is_content).collect()
}
