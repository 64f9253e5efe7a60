// Unit tests for vectorization and score aggregation.
//
// Exercises the invariants the pipeline depends on: the vocabulary cap,
// combined-map summation, top-term ordering, and run-to-run determinism.

use chatlens::features::scores::{combine, per_document_maps, top_terms, ScoreMap};
use chatlens::features::vectorizer::{CountVectorizer, TfidfVectorizer};
use chatlens::preprocess::stopwords::StopwordFilter;
use chatlens::preprocess::tokenize::tokenize;

fn tokenized(texts: &[&str]) -> Vec<Vec<String>> {
    let stopwords = StopwordFilter::english();
    texts
        .iter()
        .map(|t| stopwords.filter(tokenize(t)))
        .collect()
}

// ============================================================
// Vocabulary cap
// ============================================================

#[test]
fn bow_vocabulary_respects_cap() {
    let docs = tokenized(&[
        "alpha beta gamma delta epsilon zeta eta theta",
        "iota kappa lambda alpha beta gamma",
    ]);
    let corpus = CountVectorizer::new(5).fit_transform(&docs);
    assert!(corpus.vocabulary.len() <= 5);
}

#[test]
fn tfidf_vocabulary_respects_cap() {
    let docs = tokenized(&[
        "alpha beta gamma delta epsilon zeta eta theta",
        "iota kappa lambda alpha beta gamma",
    ]);
    let corpus = TfidfVectorizer::new(5).fit_transform(&docs);
    assert!(corpus.vocabulary.len() <= 5);
}

#[test]
fn cap_larger_than_term_count_keeps_everything() {
    let docs = tokenized(&["alpha beta", "gamma"]);
    let corpus = CountVectorizer::new(100).fit_transform(&docs);
    assert_eq!(corpus.vocabulary.len(), 3);
}

// ============================================================
// Combined map = term-wise sum
// ============================================================

#[test]
fn combined_map_sums_per_document_scores() {
    let docs = tokenized(&["cat sat cat", "cat ran dog"]);
    let corpus = CountVectorizer::new(10).fit_transform(&docs);
    let maps = per_document_maps(&corpus);
    let combined = combine(&maps);

    for term in &corpus.vocabulary {
        let expected: f64 = maps.iter().map(|m| m.get(term).copied().unwrap_or(0.0)).sum();
        assert_eq!(combined[term], expected, "term {term}");
    }
    assert_eq!(combined["cat"], 3.0);
    assert_eq!(combined["dog"], 1.0);
}

#[test]
fn absent_terms_contribute_zero() {
    let a: ScoreMap = [("solo".to_string(), 2.0)].into();
    let b: ScoreMap = [("other".to_string(), 1.0)].into();
    let combined = combine(&[a, b]);
    assert_eq!(combined["solo"], 2.0);
    assert_eq!(combined["other"], 1.0);
}

// ============================================================
// Top-term ordering
// ============================================================

#[test]
fn top_terms_exactly_min_of_n_and_len() {
    let map: ScoreMap = (0..8)
        .map(|i| (format!("term{i}"), i as f64))
        .collect();
    assert_eq!(top_terms(&map, 20).len(), 8);
    assert_eq!(top_terms(&map, 3).len(), 3);
}

#[test]
fn top_terms_descending_with_lexicographic_ties() {
    let map: ScoreMap = [
        ("zebra".to_string(), 2.0),
        ("apple".to_string(), 2.0),
        ("mango".to_string(), 5.0),
    ]
    .into();
    let ranked = top_terms(&map, 3);
    assert_eq!(ranked[0].0, "mango");
    assert_eq!(ranked[1].0, "apple");
    assert_eq!(ranked[2].0, "zebra");
}

// ============================================================
// Determinism
// ============================================================

#[test]
fn identical_runs_produce_identical_score_maps() {
    let texts = &[
        "the quick brown fox jumps over the lazy dog",
        "pack my box with five dozen liquor jugs",
        "the five boxing wizards jump quickly",
    ];
    let docs = tokenized(texts);

    let first = per_document_maps(&TfidfVectorizer::new(10).fit_transform(&docs));
    let second = per_document_maps(&TfidfVectorizer::new(10).fit_transform(&docs));
    assert_eq!(first, second);

    let first = per_document_maps(&CountVectorizer::new(10).fit_transform(&docs));
    let second = per_document_maps(&CountVectorizer::new(10).fit_transform(&docs));
    assert_eq!(first, second);
}

// ============================================================
// The reference scenario
// ============================================================

#[test]
fn cat_sat_cat_ran_scenario() {
    let docs = tokenized(&["the cat sat", "the cat ran"]);
    let corpus = CountVectorizer::new(5).fit_transform(&docs);

    assert!(!corpus.vocabulary.contains(&"the".to_string()));

    let maps = per_document_maps(&corpus);
    assert_eq!(maps[0]["cat"], 1.0);
    assert_eq!(maps[1]["cat"], 1.0);
    assert_eq!(combine(&maps)["cat"], 2.0);
}

#[test]
fn empty_document_yields_zero_scores_only() {
    let docs = tokenized(&["cat sat", ""]);
    let corpus = CountVectorizer::new(5).fit_transform(&docs);
    let maps = per_document_maps(&corpus);
    assert!(maps[1].values().all(|&v| v == 0.0));
}
