// Stopword filtering backed by the stop-words crate's language lists.

use std::collections::HashSet;

use anyhow::{bail, Result};
use stop_words::{get, LANGUAGE};

/// Set-backed stopword filter.
///
/// Built once per run and shared between the preprocessor and the
/// vectorizers so both stages agree on what counts as a content word.
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    /// English stopwords from the stop-words crate.
    pub fn english() -> Self {
        Self {
            words: get(LANGUAGE::English).into_iter().collect(),
        }
    }

    /// A filter for a named language ("english", "spanish", ...).
    ///
    /// Unknown names are an error rather than an empty list, so a typo in
    /// the configuration can't silently disable filtering.
    pub fn for_language(name: &str) -> Result<Self> {
        let language = match name.to_lowercase().as_str() {
            "english" => LANGUAGE::English,
            "spanish" => LANGUAGE::Spanish,
            "french" => LANGUAGE::French,
            "german" => LANGUAGE::German,
            "italian" => LANGUAGE::Italian,
            "portuguese" => LANGUAGE::Portuguese,
            "dutch" => LANGUAGE::Dutch,
            "russian" => LANGUAGE::Russian,
            "arabic" => LANGUAGE::Arabic,
            "hindi" => LANGUAGE::Hindi,
            other => bail!("unsupported stopword language: {other}"),
        };
        Ok(Self {
            words: get(language).into_iter().collect(),
        })
    }

    /// A filter over a caller-supplied list.
    pub fn from_words(words: Vec<String>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Drop stopwords from a token stream, preserving order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stopword(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_contains_the_obvious() {
        let filter = StopwordFilter::english();
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("cat"));
    }

    #[test]
    fn filter_preserves_order() {
        let filter = StopwordFilter::english();
        let tokens = vec![
            "the".to_string(),
            "cat".to_string(),
            "and".to_string(),
            "dog".to_string(),
        ];
        assert_eq!(filter.filter(tokens), vec!["cat", "dog"]);
    }

    #[test]
    fn custom_list() {
        let filter = StopwordFilter::from_words(vec!["foo".to_string()]);
        assert!(filter.is_stopword("foo"));
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn named_languages_resolve() {
        let spanish = StopwordFilter::for_language("Spanish").unwrap();
        assert!(spanish.is_stopword("el"));
        assert!(StopwordFilter::for_language("klingon").is_err());
    }
}
