mod common;

use boilerplate_rs::{
    extract, extract_with_options, ArticleExtractor, FilterChain, Label, Options, TextDocument,
};
use common::{news_page, verdicts, words};

#[test]
fn news_page_yields_single_fused_content_block() {
    let mut doc = news_page();
    let changed = extract(&mut doc).expect("expected Ok(_)");
    assert!(changed);

    let content: Vec<_> = doc.content_blocks().collect();
    assert_eq!(content.len(), 1, "debug:\n{}", doc.debug_string());

    let article = content[0];
    assert_eq!(article.num_words(), 204);
    assert!(article.text().starts_with("Storm Closes Coastal Roads\n"));
    assert!(article.text().contains("first0"));
    assert!(article.text().contains("second99"));
    assert!(article.has_label(&Label::Title));
    assert!(article.has_label(&Label::VeryLikelyContent));

    // Navigation, the dangling headline, the marker and the related list
    // remain, as boilerplate.
    assert_eq!(doc.blocks.len(), 5);
    assert_eq!(verdicts(&doc), vec![false, true, false, false, false]);
    assert_eq!(doc.blocks[0].text(), "Home News Sport Weather Contact");
    assert_eq!(doc.blocks[2].text(), "Latest Weather Updates");
    assert!(!doc.blocks[2].has_label(&Label::IndicatesEndOfText));
    assert_eq!(doc.blocks[3].text(), "Have your say");
    assert!(doc.blocks[3].has_label(&Label::IndicatesEndOfText));
    assert!(doc.blocks[4].text().starts_with("Related articles"));
    assert!(doc.blocks[4].has_label(&Label::IndicatesEndOfText));
}

#[test]
fn dangling_headline_survives_cut_off_and_is_demoted_as_trailing_heading() {
    let filters = ArticleExtractor::default().chain().filters().to_vec();

    let mut up_to_cut_off = news_page();
    FilterChain::new(filters[..4].to_vec())
        .process(&mut up_to_cut_off)
        .expect("expected Ok(_)");
    // The marker cuts the page after the headline, so it is still content here.
    assert_eq!(
        verdicts(&up_to_cut_off),
        vec![false, true, true, true, true, false, false]
    );

    let mut up_to_trailing_headline = news_page();
    FilterChain::new(filters[..5].to_vec())
        .process(&mut up_to_trailing_headline)
        .expect("expected Ok(_)");
    assert_eq!(
        verdicts(&up_to_trailing_headline),
        vec![false, true, true, true, false, false, false]
    );
}

#[test]
fn content_text_contains_only_the_article() {
    let mut doc = news_page();
    extract(&mut doc).expect("expected Ok(_)");

    let text = doc.content();
    assert!(text.contains("Storm Closes Coastal Roads"));
    assert!(!text.contains("Home News"));
    assert!(!text.contains("Latest Weather Updates"));
    assert!(!text.contains("Have your say"));
    assert!(!text.contains("Flood warnings"));
}

#[test]
fn repeated_runs_are_deterministic() {
    let mut first = news_page();
    let mut second = first.clone();

    let changed_first = extract(&mut first).expect("expected Ok(_)");
    let changed_second = extract(&mut second).expect("expected Ok(_)");

    assert_eq!(changed_first, changed_second);
    assert_eq!(first, second);
}

#[test]
fn extractor_is_shared_across_threads() {
    let extractor = ArticleExtractor::instance();
    let results: Vec<TextDocument> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let mut doc = news_page();
                    extractor.process(&mut doc).expect("expected Ok(_)");
                    doc
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect()
    });

    for doc in &results {
        assert_eq!(doc, &results[0]);
    }
}

#[test]
fn process_with_estimate_flags_thin_pages() {
    let mut doc = news_page();
    let outcome = ArticleExtractor::default()
        .process_with_estimate(&mut doc)
        .expect("expected Ok(_)");
    assert!(outcome.changed);
    assert_eq!(outcome.before.num_words(), 225);
    assert_eq!(outcome.after.num_words(), 204);
    assert!(!outcome.low_quality);

    let mut thin = TextDocument::new(
        None,
        vec![
            boilerplate_rs::TextBlock::from_text(words("w", 20), 0, 1),
            boilerplate_rs::TextBlock::from_text(words("x", 20), 1, 1),
        ],
    );
    let outcome = ArticleExtractor::default()
        .process_with_estimate(&mut thin)
        .expect("expected Ok(_)");
    assert!(outcome.low_quality);
}

#[test]
fn required_title_is_enforced() {
    let options = Options {
        require_title: true,
        ..Options::default()
    };

    let mut doc = news_page();
    doc.title = None;
    let err = extract_with_options(&mut doc, &options).unwrap_err();
    assert!(matches!(err, boilerplate_rs::ExtractionError::MissingTitle { .. }));

    let mut doc = news_page();
    assert!(extract_with_options(&mut doc, &options).is_ok());
}

#[test]
fn missing_title_is_tolerated_by_default() {
    let mut doc = news_page();
    doc.title = None;
    extract(&mut doc).expect("expected Ok(_)");

    // Without a title match the body is still found.
    let content: Vec<_> = doc.content_blocks().collect();
    assert_eq!(content.len(), 1);
    assert!(content[0].num_words() >= 200);
    assert!(!content[0].has_label(&Label::Title));
}

#[test]
fn empty_document_is_not_an_error() {
    let mut doc = TextDocument::default();
    let changed = extract(&mut doc).expect("expected Ok(_)");
    assert!(!changed);
    assert!(doc.blocks.is_empty());
}
