// Word tokenization shared by the preprocessor and the vectorizers.

/// Split text into lowercase word tokens.
///
/// A token is a maximal run of alphabetic characters of length >= 2,
/// the same shape of token the feature vocabulary is built from, so a
/// preprocessed file re-tokenizes to exactly the same terms.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|w| w.chars().count() >= 2)
        .map(|w| w.to_lowercase())
        .collect()
}
