use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy; CLI flags
/// override whatever is resolved here.
pub struct Config {
    /// Output directory for rendered figures (CHATLENS_SAVE_DIR)
    pub save_dir: String,
    /// Vocabulary cap for the vectorizers (CHATLENS_MAX_FEATURES)
    pub max_features: usize,
    /// Terms per per-document bar chart (CHATLENS_TOP_N)
    pub top_n: usize,
    /// Terms on the combined bar chart (CHATLENS_COMBINED_TOP_N)
    pub combined_top_n: usize,
    /// Stopword language for the vectorizers (CHATLENS_STOP_WORDS)
    pub stop_words: String,
    /// Output directory for preprocessed text (CHATLENS_PREPROCESSED_DIR)
    pub preprocessed_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every option has a default, so a bare `chatlens features chat.txt`
    /// run works without any environment setup.
    pub fn load() -> Result<Self> {
        Ok(Self {
            save_dir: env::var("CHATLENS_SAVE_DIR").unwrap_or_else(|_| "figures".to_string()),
            max_features: parse_env("CHATLENS_MAX_FEATURES", 100)?,
            top_n: parse_env("CHATLENS_TOP_N", 20)?,
            combined_top_n: parse_env("CHATLENS_COMBINED_TOP_N", 30)?,
            stop_words: env::var("CHATLENS_STOP_WORDS").unwrap_or_else(|_| "english".to_string()),
            preprocessed_dir: env::var("CHATLENS_PREPROCESSED_DIR")
                .unwrap_or_else(|_| "preprocessed_chats".to_string()),
        })
    }
}

fn parse_env(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("{key} must be a positive integer, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
