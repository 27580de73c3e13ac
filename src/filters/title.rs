//! Title association: finding the block that repeats the document title, and
//! pulling it back into the article once the main content is known.

use std::collections::HashSet;

use regex::Regex;
use tracing::trace;

use crate::document::TextDocument;
use crate::error::{ExtractionError, Result};
use crate::labels::Label;
use crate::patterns::{
    TITLE_DASH_SEPARATOR, TITLE_IGNORED_PUNCTUATION, TITLE_LEADING_DASH_PART,
    TITLE_PART_SEPARATORS, TITLE_PIPE_SEPARATOR, TITLE_TRAILING_DASH_PART,
};

use super::DocumentFilter;

/// Parts split on ` | ` or ` - ` need this many words to count as a title.
const MIN_SPLIT_PART_WORDS: usize = 4;

/// Where the title to match comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleSource {
    /// Read [`TextDocument::title`] on every call.
    Document,
    /// A title fixed at construction time.
    Fixed(String),
}

/// Labels the first block whose text matches the document title with [`Label::Title`].
///
/// The title is normalized (lower-cased, NBSP to space, apostrophes dropped)
/// and expanded into candidate titles: the whole title, its longest part for
/// several separator sets, every long-enough part around ` | ` and ` - `, and
/// the title without a leading or trailing `" - site"` part. A block matches if
/// its normalized text equals a candidate, optionally ignoring `?!.-:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTitleMatchClassifier {
    source: TitleSource,
    require_title: bool,
}

impl DocumentTitleMatchClassifier {
    /// Matches against the title of each processed document.
    #[must_use]
    pub fn from_document() -> Self {
        Self {
            source: TitleSource::Document,
            require_title: false,
        }
    }

    /// Matches against a fixed title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            source: TitleSource::Fixed(title.into()),
            require_title: false,
        }
    }

    /// Fail with [`ExtractionError::MissingTitle`] instead of skipping when there
    /// is no usable title.
    #[must_use]
    pub fn require_title(mut self, require_title: bool) -> Self {
        self.require_title = require_title;
        self
    }
}

fn normalize(text: &str) -> String {
    text.replace('\u{a0}', " ")
        .replace('\'', "")
        .trim()
        .to_lowercase()
}

fn strip_punctuation(text: &str) -> String {
    TITLE_IGNORED_PUNCTUATION.replace_all(text, "").trim().to_string()
}

fn num_words(text: &str) -> usize {
    text.split(' ').filter(|w| !w.is_empty()).count()
}

/// The part of `title` with the most words (or, failing that, the most chars).
fn longest_part(title: &str, separator: &Regex) -> Option<String> {
    let parts: Vec<&str> = separator.split(title).collect();
    if parts.len() == 1 {
        return None;
    }

    let mut longest_num_words = 0;
    let mut longest = "";
    for part in parts {
        if part.contains(".com") {
            continue;
        }
        let words = num_words(part);
        if words > longest_num_words || part.len() > longest.len() {
            longest_num_words = words;
            longest = part;
        }
    }

    if longest.is_empty() {
        None
    } else {
        Some(longest.trim().to_string())
    }
}

/// Every part of `title` with at least `min_words` words.
fn long_parts<'a>(title: &'a str, separator: &Regex, min_words: usize) -> Vec<&'a str> {
    let parts: Vec<&str> = separator.split(title).collect();
    if parts.len() == 1 {
        return Vec::new();
    }
    parts
        .into_iter()
        .filter(|part| !part.contains(".com") && num_words(part) >= min_words)
        .collect()
}

/// Candidate titles for a raw title; empty if the title is blank.
fn potential_titles(title: &str) -> HashSet<String> {
    let mut titles = HashSet::new();
    let title = normalize(title);
    if title.is_empty() {
        return titles;
    }

    for separator in TITLE_PART_SEPARATORS.iter() {
        if let Some(part) = longest_part(&title, separator) {
            titles.insert(part);
        }
    }
    for separator in [&*TITLE_PIPE_SEPARATOR, &*TITLE_DASH_SEPARATOR] {
        titles.extend(long_parts(&title, separator, MIN_SPLIT_PART_WORDS).into_iter().map(str::to_string));
    }
    titles.insert(TITLE_TRAILING_DASH_PART.replace(&title, "").into_owned());
    titles.insert(TITLE_LEADING_DASH_PART.replace(&title, "").into_owned());

    let stripped: Vec<String> = titles.iter().map(|t| strip_punctuation(t)).collect();
    titles.extend(stripped);
    titles.insert(title);
    titles.remove("");
    titles
}

impl DocumentFilter for DocumentTitleMatchClassifier {
    fn name(&self) -> &'static str {
        "DocumentTitleMatchClassifier"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let title = match &self.source {
            TitleSource::Document => doc.title().map(str::to_string),
            TitleSource::Fixed(title) => Some(title.clone()),
        };
        let candidates = title.as_deref().map(potential_titles).unwrap_or_default();

        if candidates.is_empty() {
            if self.require_title {
                return Err(ExtractionError::MissingTitle {
                    filter: self.name(),
                });
            }
            return Ok(false);
        }

        for block in &mut doc.blocks {
            let text = normalize(block.text());
            if candidates.contains(&text) || candidates.contains(&strip_punctuation(&text)) {
                trace!(offset = block.offset_start(), "title block");
                block.add_label(Label::Title);
                return Ok(true);
            }
        }

        Ok(false)
    }
}

/// Promotes the blocks between a title block and the first content block.
///
/// If a [`Label::Title`] block precedes the first content block, every block
/// from the title up to that content block which carries
/// [`Label::MightBeContent`] becomes content again.
///
/// In [`ArticleExtractor`]'s chain, [`BoilerplateBlockFilter`] has already
/// removed the title blocks that were boilerplate at that point. This filter
/// can then only restore a title block that was still content there and was
/// demoted later by [`KeepLargestBlockFilter`].
///
/// [`ArticleExtractor`]: crate::ArticleExtractor
/// [`BoilerplateBlockFilter`]: super::BoilerplateBlockFilter
/// [`KeepLargestBlockFilter`]: super::KeepLargestBlockFilter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandTitleToContentFilter;

impl ExpandTitleToContentFilter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentFilter for ExpandTitleToContentFilter {
    fn name(&self) -> &'static str {
        "ExpandTitleToContentFilter"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut title = None;
        let mut content_start = None;

        for (i, block) in doc.blocks.iter().enumerate() {
            if block.has_label(&Label::Title) {
                title = Some(i);
            }
            if block.is_content() {
                content_start = Some(i);
                break;
            }
        }

        let (Some(title), Some(content_start)) = (title, content_start) else {
            return Ok(false);
        };
        if content_start <= title {
            return Ok(false);
        }

        let mut changes = false;
        for block in &mut doc.blocks[title..content_start] {
            if block.has_label(&Label::MightBeContent) {
                changes |= block.set_is_content(true);
            }
        }
        Ok(changes)
    }
}
