// Parser for WhatsApp-style export lines:
//
//   [3/14/23, 9:05:12 AM] Ana: good morning everyone
//   [14/3/23, 21:05:07] Ben: running late
//
// Lines that don't match the pattern (system notices, continuation lines
// of multi-line messages) are skipped, as are lines whose timestamp fails
// to parse.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex_lite::Regex;
use tracing::debug;

static MESSAGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{1,2}/\d{1,2}/\d{2}), (\d{1,2}:\d{2}:\d{2})\s?(AM|PM)?\] (.*?): (.*)$")
        .unwrap()
});

/// One parsed chat message.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub timestamp: NaiveDateTime,
    pub sender: String,
    pub text: String,
    /// File stem of the chat the message came from.
    pub chat: String,
}

impl ChatMessage {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn hour(&self) -> u32 {
        use chrono::Timelike;
        self.timestamp.hour()
    }

    /// 2-hour bucket start: 0, 2, 4, ... 22.
    pub fn period(&self) -> u32 {
        self.hour() / 2 * 2
    }
}

/// Parse every matching line of a chat export.
///
/// `chat` names the source file (stem) and is carried on each message so
/// combined views can still group per chat.
pub fn parse_chat(raw: &str, chat: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::new();
    let mut skipped = 0usize;

    for line in raw.lines() {
        let Some(caps) = MESSAGE_LINE.captures(line) else {
            continue;
        };
        let date = &caps[1];
        let time = &caps[2];
        let meridiem = caps.get(3).map(|m| m.as_str());
        let sender = caps[4].trim().to_string();
        let text = caps[5].trim().to_string();

        let parsed = match meridiem {
            Some(m) => NaiveDateTime::parse_from_str(
                &format!("{date} {time} {m}"),
                "%m/%d/%y %I:%M:%S %p",
            ),
            None => NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%m/%d/%y %H:%M:%S"),
        };

        match parsed {
            Ok(timestamp) => messages.push(ChatMessage {
                timestamp,
                sender,
                text,
                chat: chat.to_string(),
            }),
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(chat, skipped, "Skipped lines with unparseable timestamps");
    }
    messages
}
