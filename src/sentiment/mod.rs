// Sentiment scoring and activity aggregation over parsed chat messages.
//
// Polarity is lexicon-based: each sentiment word contributes its weight,
// scaled by a preceding intensity modifier and flipped by a preceding
// negation. The message score is the mean contribution, clamped to
// [-1.0, 1.0]; a message with no sentiment words scores 0.0.

pub mod lexicon;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::chat::ChatMessage;
use lexicon::Lexicon;

/// How far back (in tokens) a negation or modifier reaches.
const SCOPE_WINDOW: usize = 3;

/// A chat message with its computed polarity.
#[derive(Debug, Clone)]
pub struct ScoredMessage {
    pub message: ChatMessage,
    pub polarity: f64,
}

/// Score one message's text in [-1.0, 1.0].
pub fn polarity(lex: &Lexicon, text: &str) -> f64 {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect();

    let mut total = 0.0;
    let mut matched = 0usize;
    let mut negated_until: Option<usize> = None;
    let mut modifier: Option<(usize, f64)> = None;

    for (i, token) in tokens.iter().enumerate() {
        if lex.is_negation(token) {
            negated_until = Some(i + SCOPE_WINDOW);
            continue;
        }
        if let Some(m) = lex.modifier(token) {
            modifier = Some((i + SCOPE_WINDOW, m));
            continue;
        }

        let Some(base) = lex.weight(token) else {
            continue;
        };

        let mut score = base;
        if let Some((until, m)) = modifier {
            if i <= until {
                score *= m;
            }
            modifier = None;
        }
        if let Some(until) = negated_until {
            if i <= until {
                score = -score;
            }
            negated_until = None;
        }

        total += score;
        matched += 1;
    }

    if matched == 0 {
        return 0.0;
    }
    (total / matched as f64).clamp(-1.0, 1.0)
}

/// Score a batch of messages.
pub fn score_messages(lex: &Lexicon, messages: Vec<ChatMessage>) -> Vec<ScoredMessage> {
    messages
        .into_iter()
        .map(|message| {
            let polarity = polarity(lex, &message.text);
            ScoredMessage { message, polarity }
        })
        .collect()
}

/// Message count per calendar day, ordered by date.
pub fn messages_per_day(messages: &[ScoredMessage]) -> BTreeMap<NaiveDate, u64> {
    let mut counts = BTreeMap::new();
    for m in messages {
        *counts.entry(m.message.date()).or_insert(0) += 1;
    }
    counts
}

/// Message count per hour of day (24 buckets).
pub fn messages_per_hour(messages: &[ScoredMessage]) -> [u64; 24] {
    let mut counts = [0u64; 24];
    for m in messages {
        counts[m.message.hour() as usize] += 1;
    }
    counts
}

/// Message count per 2-hour period (12 buckets: 0-2:00, 2-4:00, ...).
pub fn messages_per_period(messages: &[ScoredMessage]) -> [u64; 12] {
    let mut counts = [0u64; 12];
    for m in messages {
        counts[(m.message.period() / 2) as usize] += 1;
    }
    counts
}

/// Mean polarity per sender, sorted ascending so the most negative sender
/// renders closest to the axis origin.
pub fn mean_polarity_by_sender(messages: &[ScoredMessage]) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for m in messages {
        let entry = sums.entry(m.message.sender.as_str()).or_insert((0.0, 0));
        entry.0 += m.polarity;
        entry.1 += 1;
    }
    let mut means: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(sender, (sum, n))| (sender.to_string(), sum / n as f64))
        .collect();
    means.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    means
}

/// Mean polarity over all messages; 0.0 for an empty slice.
pub fn mean_polarity(messages: &[ScoredMessage]) -> f64 {
    if messages.is_empty() {
        return 0.0;
    }
    messages.iter().map(|m| m.polarity).sum::<f64>() / messages.len() as f64
}
