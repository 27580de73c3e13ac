mod common;

use boilerplate_rs::{extract_with_options, ArticleExtractor, Label, Options};
use common::{news_page, verdicts};

#[test]
fn options_default_values_match_canonical_chain() {
    assert_eq!(
        ArticleExtractor::with_options(&Options::default()),
        ArticleExtractor::default()
    );
}

#[test]
fn dangling_headline_is_dropped_even_without_end_marker_cut_off() {
    let options = Options {
        min_words_after_content: 300,
        ..Options::default()
    };

    let mut doc = news_page();
    extract_with_options(&mut doc, &options).expect("expected Ok(_)");

    // The marker no longer cuts the page, but "Latest Weather Updates" is still
    // a trailing heading and gets demoted.
    assert_eq!(verdicts(&doc), vec![false, true, false, false, false]);
    assert!(!doc.content().contains("Latest Weather Updates"));
}

#[test]
fn zero_fusion_distance_leaves_fragments_below_largest_block_minimum() {
    let options = Options {
        fusion_max_blocks_distance: 0,
        ..Options::default()
    };

    let mut doc = news_page();
    extract_with_options(&mut doc, &options).expect("expected Ok(_)");

    // The fragments are one position apart and stay separate; neither reaches
    // 150 words, so no block is kept.
    assert_eq!(doc.blocks.len(), 6);
    assert_eq!(doc.blocks[1].num_words(), 104);
    assert_eq!(doc.blocks[2].num_words(), 100);
    assert!(doc.content_blocks().next().is_none());
}

#[test]
fn lower_largest_block_minimum_keeps_adjacent_fragment() {
    let options = Options {
        fusion_max_blocks_distance: 0,
        largest_block_min_words: 100,
        ..Options::default()
    };

    let mut doc = news_page();
    extract_with_options(&mut doc, &options).expect("expected Ok(_)");

    // The larger fragment is kept and its same-level neighbour joins it.
    assert_eq!(verdicts(&doc), vec![false, true, true, false, false, false]);
    assert!(doc.blocks[1].has_label(&Label::VeryLikelyContent));
    assert!(!doc.blocks[2].has_label(&Label::VeryLikelyContent));
}
