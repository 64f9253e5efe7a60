// Score maps — the term→score view the renderers and reports consume.

use std::collections::BTreeMap;

use super::vectorizer::VectorizedCorpus;

/// Term → non-negative score for one document (or the combined corpus).
///
/// Ordered so iteration, export, and equality are stable; the renderers
/// still sort by score explicitly before use.
pub type ScoreMap = BTreeMap<String, f64>;

/// Build one ScoreMap per document row, keyed by the shared vocabulary.
pub fn per_document_maps(corpus: &VectorizedCorpus) -> Vec<ScoreMap> {
    corpus
        .rows
        .iter()
        .map(|row| {
            corpus
                .vocabulary
                .iter()
                .cloned()
                .zip(row.iter().copied())
                .collect()
        })
        .collect()
}

/// Sum score maps term-wise. Terms absent from a map contribute zero.
pub fn combine(maps: &[ScoreMap]) -> ScoreMap {
    let mut combined = ScoreMap::new();
    for map in maps {
        for (term, score) in map {
            *combined.entry(term.clone()).or_insert(0.0) += score;
        }
    }
    combined
}

/// Sort a map's entries by score descending (ties lexicographic) and take
/// the first `n`. This is the ordering every bar chart renders.
pub fn top_terms(map: &ScoreMap, n: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = map.iter().map(|(t, s)| (t.clone(), *s)).collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(n);
    ranked
}
