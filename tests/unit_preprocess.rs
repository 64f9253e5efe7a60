// Unit tests for the preprocessing stages.

use chatlens::preprocess::clean::strip_chat_metadata;
use chatlens::preprocess::lemma::Lemmatizer;
use chatlens::preprocess::stopwords::StopwordFilter;
use chatlens::preprocess::tokenize::tokenize;
use chatlens::preprocess::preprocess_chat;

// ============================================================
// Metadata stripping
// ============================================================

#[test]
fn strips_whatsapp_style_prefixes() {
    let raw = "[3/14/23, 9:05:12 AM] Ana Torres: Running late, sorry!";
    assert_eq!(strip_chat_metadata(raw), "running late sorry");
}

#[test]
fn drops_omitted_and_edited_lines() {
    let raw = "[3/14/23, 9:05:12 AM] Ana: image omitted\n\
               [3/14/23, 9:06:00 AM] Ben: <This message edited>\n\
               [3/14/23, 9:07:00 AM] Cara: actual words";
    assert_eq!(strip_chat_metadata(raw), "actual words");
}

#[test]
fn output_is_lowercase_letters_and_spaces_only() {
    let cleaned = strip_chat_metadata("Numbers 123, symbols @#$, CAPS!");
    assert!(cleaned
        .chars()
        .all(|c| c.is_ascii_lowercase() || c == ' '));
}

// ============================================================
// Full pass
// ============================================================

#[test]
fn full_pass_produces_lemmatized_content_words() {
    let raw = "[3/14/23, 9:05:12 AM] Ana: The dogs were chasing the cats";
    let out = preprocess_chat(raw, &StopwordFilter::english(), &Lemmatizer::new());
    assert!(out.contains("dog"));
    assert!(out.contains("cat"));
    assert!(!out.split_whitespace().any(|w| w == "the"));
}

#[test]
fn stopword_only_chat_becomes_empty() {
    let raw = "the and or but if then";
    let out = preprocess_chat(raw, &StopwordFilter::english(), &Lemmatizer::new());
    assert!(out.is_empty());
}

#[test]
fn preprocessed_text_retokenizes_to_same_terms() {
    // The feature pipeline must see identical tokens whether it gets raw
    // preprocessed text or the file written by the preprocess pipeline
    let raw = "[3/14/23, 9:05:12 AM] Ana: many happy messages about holidays";
    let stopwords = StopwordFilter::english();
    let lemmatizer = Lemmatizer::new();

    let once = preprocess_chat(raw, &stopwords, &lemmatizer);
    let twice = preprocess_chat(&once, &stopwords, &lemmatizer);
    assert_eq!(once, twice);

    let tokens_a = stopwords.filter(tokenize(&once));
    let tokens_b = stopwords.filter(tokenize(&twice));
    assert_eq!(tokens_a, tokens_b);
}
