// Unit tests for chat parsing and polarity scoring.

use chatlens::chat::parse_chat;
use chatlens::sentiment::lexicon::Lexicon;
use chatlens::sentiment::{
    mean_polarity, mean_polarity_by_sender, messages_per_day, messages_per_hour, polarity,
    score_messages,
};

// ============================================================
// Chat parser
// ============================================================

#[test]
fn parser_reads_both_timestamp_formats() {
    let raw = "[3/14/23, 9:05:12 AM] Ana: morning\n\
               [3/14/23, 13:30:00] Ben: afternoon\n\
               [3/14/23, 9:05:12 PM] Cara: evening";
    let messages = parse_chat(raw, "demo");
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].hour(), 9);
    assert_eq!(messages[1].hour(), 13);
    assert_eq!(messages[2].hour(), 21);
}

#[test]
fn parser_skips_system_and_continuation_lines() {
    let raw = "Ana added Ben\n\
               [3/14/23, 9:05:12 AM] Ana: first line\n\
               second line of the same message\n\
               [99/99/99, 9:05:12 AM] Ana: bad date";
    let messages = parse_chat(raw, "demo");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "first line");
}

#[test]
fn parser_keeps_sender_with_spaces() {
    let messages = parse_chat("[3/14/23, 9:05:12 AM] Maria Jose Lopez: hola", "demo");
    assert_eq!(messages[0].sender, "Maria Jose Lopez");
}

// ============================================================
// Polarity scoring
// ============================================================

#[test]
fn polarity_signs_match_sentiment() {
    let lex = Lexicon::new();
    assert!(polarity(&lex, "what a wonderful amazing day") > 0.0);
    assert!(polarity(&lex, "this is horrible and sad") < 0.0);
    assert_eq!(polarity(&lex, "meeting moved to tuesday"), 0.0);
}

#[test]
fn polarity_negation_flips_positive_words() {
    let lex = Lexicon::new();
    let negated = polarity(&lex, "not happy with this");
    assert!(negated <= 0.0, "negated positive scored {negated}");
}

#[test]
fn polarity_bounded_by_one() {
    let lex = Lexicon::new();
    for text in [
        "extremely amazing absolutely perfect really wonderful",
        "absolutely terrible extremely horrible really awful",
        "",
    ] {
        let p = polarity(&lex, text);
        assert!((-1.0..=1.0).contains(&p), "{text:?} scored {p}");
    }
}

// ============================================================
// Aggregation
// ============================================================

#[test]
fn aggregation_counts_every_message_once() {
    let raw = "[3/14/23, 9:05:12 AM] Ana: great\n\
               [3/14/23, 11:00:00 AM] Ben: fine\n\
               [3/16/23, 9:30:00 AM] Ana: hello";
    let lex = Lexicon::new();
    let scored = score_messages(&lex, parse_chat(raw, "demo"));

    let per_day = messages_per_day(&scored);
    assert_eq!(per_day.values().sum::<u64>(), 3);
    assert_eq!(per_day.len(), 2);

    let per_hour = messages_per_hour(&scored);
    assert_eq!(per_hour.iter().sum::<u64>(), 3);
    assert_eq!(per_hour[9], 2);
}

#[test]
fn sender_means_cover_every_sender() {
    let raw = "[3/14/23, 9:05:12 AM] Ana: love it\n\
               [3/14/23, 9:06:12 AM] Ben: hate it\n\
               [3/14/23, 9:07:12 AM] Ana: still love it";
    let lex = Lexicon::new();
    let scored = score_messages(&lex, parse_chat(raw, "demo"));
    let means = mean_polarity_by_sender(&scored);

    assert_eq!(means.len(), 2);
    // Sorted ascending: the negative sender comes first
    assert!(means[0].1 <= means[1].1);

    let overall = mean_polarity(&scored);
    assert!((-1.0..=1.0).contains(&overall));
}

#[test]
fn mean_polarity_of_nothing_is_zero() {
    assert_eq!(mean_polarity(&[]), 0.0);
}
