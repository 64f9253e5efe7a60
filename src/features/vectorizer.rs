// Count and TF-IDF vectorizers with a capped, deterministic vocabulary.
//
// Both vectorizers select at most `max_features` terms by aggregate score
// across the corpus (total occurrences for the count method, total TF-IDF
// mass for the weight method), with ties broken lexicographically so that
// identical inputs always produce identical vocabularies. The final
// vocabulary is sorted alphabetically and every document row is aligned
// to it.

use std::collections::{HashMap, HashSet};

/// A fitted vocabulary plus one dense score row per input document.
///
/// Invariant: `rows[i].len() == vocabulary.len()` for every row, and the
/// vocabulary holds at most the configured `max_features` terms.
#[derive(Debug, Clone)]
pub struct VectorizedCorpus {
    pub vocabulary: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

/// Bag-of-Words: raw per-document term counts.
pub struct CountVectorizer {
    max_features: usize,
}

impl CountVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    pub fn fit_transform(&self, documents: &[Vec<String>]) -> VectorizedCorpus {
        // Aggregate corpus frequency decides which terms survive the cap
        let mut totals: HashMap<&str, u64> = HashMap::new();
        for doc in documents {
            for term in doc {
                *totals.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let vocabulary = select_vocabulary(
            totals.iter().map(|(t, c)| (*t, *c as f64)),
            self.max_features,
        );
        let index = vocabulary_index(&vocabulary);

        let rows = documents
            .iter()
            .map(|doc| {
                let mut row = vec![0.0; vocabulary.len()];
                for term in doc {
                    if let Some(&i) = index.get(term.as_str()) {
                        row[i] += 1.0;
                    }
                }
                row
            })
            .collect();

        VectorizedCorpus { vocabulary, rows }
    }
}

/// TF-IDF with smoothed IDF and L2-normalized rows.
pub struct TfidfVectorizer {
    max_features: usize,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    pub fn fit_transform(&self, documents: &[Vec<String>]) -> VectorizedCorpus {
        let n_docs = documents.len() as f64;

        // Document frequency over the full term set
        let mut doc_freq: HashMap<&str, u64> = HashMap::new();
        for doc in documents {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
        let idf: HashMap<&str, f64> = doc_freq
            .iter()
            .map(|(term, df)| (*term, ((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0))
            .collect();

        // Aggregate TF-IDF mass decides which terms survive the cap
        let mut mass: HashMap<&str, f64> = HashMap::new();
        for doc in documents {
            let mut counts: HashMap<&str, f64> = HashMap::new();
            for term in doc {
                *counts.entry(term.as_str()).or_insert(0.0) += 1.0;
            }
            for (term, tf) in counts {
                *mass.entry(term).or_insert(0.0) += tf * idf[term];
            }
        }

        let vocabulary =
            select_vocabulary(mass.iter().map(|(t, m)| (*t, *m)), self.max_features);
        let index = vocabulary_index(&vocabulary);

        let rows = documents
            .iter()
            .map(|doc| {
                let mut row = vec![0.0; vocabulary.len()];
                for term in doc {
                    if let Some(&i) = index.get(term.as_str()) {
                        row[i] += idf[term.as_str()];
                    }
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        VectorizedCorpus { vocabulary, rows }
    }
}

/// Take the top `cap` terms by score, ties broken lexicographically, and
/// return them in alphabetical order.
fn select_vocabulary<'a>(
    scored: impl Iterator<Item = (&'a str, f64)>,
    cap: usize,
) -> Vec<String> {
    let mut ranked: Vec<(&str, f64)> = scored.collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    ranked.truncate(cap);

    let mut vocabulary: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
    vocabulary.sort();
    vocabulary
}

fn vocabulary_index(vocabulary: &[String]) -> HashMap<&str, usize> {
    vocabulary
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect()
}

fn l2_normalize(row: &mut [f64]) {
    let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in row.iter_mut() {
            *x /= norm;
        }
    }
}
