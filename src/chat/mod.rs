// Chat-export parsing — timestamped messages out of raw log lines.

pub mod parser;

pub use parser::{parse_chat, ChatMessage};
