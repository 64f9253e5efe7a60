// Text preprocessing — turns a raw chat export into a clean token stream.
//
// The stages mirror how the exports are structured: platform metadata and
// timestamps first, then casing/punctuation, then tokens, then stopwords,
// then lemmas. Each stage is a pure function so the pieces are testable
// in isolation and reusable by the feature pipeline.

pub mod clean;
pub mod lemma;
pub mod stopwords;
pub mod tokenize;

use lemma::Lemmatizer;
use stopwords::StopwordFilter;

/// Run the full preprocessing pass over one chat export.
///
/// Returns the space-joined lemmatized tokens, the exact text the
/// feature-extraction pipeline expects as input.
pub fn preprocess_chat(raw: &str, stopwords: &StopwordFilter, lemmatizer: &Lemmatizer) -> String {
    let cleaned = clean::strip_chat_metadata(raw);
    let tokens = tokenize::tokenize(&cleaned);
    let kept = stopwords.filter(tokens);
    let lemmas: Vec<String> = kept.iter().map(|w| lemmatizer.lemma(w)).collect();
    lemmas.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pass_strips_metadata_stopwords_and_plurals() {
        let raw = "[3/14/23, 9:05:12 AM] Ana: The cats are sleeping\n\
                   [3/14/23, 9:06:02 AM] Ben: image omitted\n\
                   [3/14/23, 9:07:44 AM] Ana: so many dogs here";
        let stopwords = StopwordFilter::english();
        let lemmatizer = Lemmatizer::new();

        let out = preprocess_chat(raw, &stopwords, &lemmatizer);

        assert!(out.contains("cat"));
        assert!(out.contains("dog"));
        assert!(!out.contains("the"));
        assert!(!out.contains("omitted"), "omitted line survived: {out}");
        assert!(!out.contains("ana"), "sender name survived: {out}");
    }

    #[test]
    fn empty_input_produces_empty_output() {
        let stopwords = StopwordFilter::english();
        let lemmatizer = Lemmatizer::new();
        assert_eq!(preprocess_chat("", &stopwords, &lemmatizer), "");
    }
}
