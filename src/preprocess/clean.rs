// Metadata stripping — removes everything a chat export adds around the
// words people actually typed.

use std::sync::LazyLock;

use regex_lite::Regex;

/// `[3/14/23, 9:05:12 AM] Sender Name: ` prefixes, with optional seconds
/// and optional meridiem.
static METADATA_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\[\d{1,2}/\d{1,2}/\d{2,4},? \d{1,2}:\d{1,2}(:\d{1,2})? ?([AP]M)?\] .*?: ")
        .unwrap()
});

/// Stray meridiem tokens left behind by timestamps quoted mid-message.
static MERIDIEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(pm|am)\b").unwrap());

/// Strip export metadata from a raw chat log.
///
/// Drops placeholder lines ("image omitted", "message edited"), removes
/// the timestamp/sender prefix from each surviving line, lowercases, and
/// deletes every character outside `[a-z ]`. The result is a single line
/// of words separated by single spaces.
pub fn strip_chat_metadata(raw: &str) -> String {
    let mut kept = Vec::new();
    for line in raw.lines() {
        let lower = line.to_lowercase();
        if lower.contains("omitted") || lower.contains("message edited") {
            continue;
        }

        let line = METADATA_PREFIX.replace(line, "");
        let line = MERIDIEM.replace_all(&line, "");
        let line = line.trim();
        if !line.is_empty() {
            kept.push(line.to_string());
        }
    }

    let joined = kept.join(" ").to_lowercase();
    let mut cleaned = String::with_capacity(joined.len());
    for c in joined.chars() {
        if c.is_ascii_lowercase() || c == ' ' {
            cleaned.push(c);
        }
    }
    // Collapse runs of spaces introduced by deleted punctuation
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
