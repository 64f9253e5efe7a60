// Sentiment/activity pipeline: parse timestamped chats, score polarity,
// render the per-chat and combined charts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::chat::parse_chat;
use crate::output::terminal;
use crate::render::{activity, sentiment as charts, RenderOutcome};
use crate::sentiment::{self, lexicon::Lexicon, ScoredMessage};

/// What one run produced.
#[derive(Debug, Default)]
pub struct SentimentReport {
    pub chats: usize,
    pub empty_chats: usize,
    pub messages: usize,
    pub rendered: usize,
    pub skipped_empty: usize,
}

impl SentimentReport {
    fn record(&mut self, outcome: &RenderOutcome) {
        match outcome {
            RenderOutcome::Rendered(_) => self.rendered += 1,
            RenderOutcome::SkippedEmpty => self.skipped_empty += 1,
        }
    }
}

/// Run the sentiment pipeline over the given chat files.
pub fn run<P: AsRef<Path>>(paths: &[P], save_dir: &Path) -> Result<SentimentReport> {
    let lexicon = Lexicon::new();
    let mut report = SentimentReport::default();
    let mut all_scored: Vec<ScoredMessage> = Vec::new();

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Analyzing [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    for path in paths {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let messages = parse_chat(&raw, &title);
        report.chats += 1;

        if messages.is_empty() {
            warn!(chat = %title, "No parseable messages, skipping charts");
            println!("  {}: {}", title.bold(), "no parseable messages".yellow());
            report.empty_chats += 1;
            pb.inc(1);
            continue;
        }

        let scored = sentiment::score_messages(&lexicon, messages);
        report.messages += scored.len();
        info!(chat = %title, messages = scored.len(), "Scored chat");

        let senders = sentiment::mean_polarity_by_sender(&scored);
        terminal::display_sentiment_summary(
            &title,
            scored.len(),
            senders.len(),
            sentiment::mean_polarity(&scored),
        );

        report.record(&activity::date_activity(
            &sentiment::messages_per_day(&scored),
            &title,
            save_dir,
        )?);
        report.record(&activity::hourly_activity(
            &sentiment::messages_per_hour(&scored),
            &title,
            save_dir,
        )?);
        report.record(&activity::period_activity(
            &sentiment::messages_per_period(&scored),
            &title,
            save_dir,
        )?);
        report.record(&charts::user_sentiment(&senders, &title, save_dir)?);
        let polarities: Vec<f64> = scored.iter().map(|m| m.polarity).collect();
        report.record(&charts::sentiment_distribution(&polarities, &title, save_dir)?);

        all_scored.extend(scored);
        pb.inc(1);
    }
    pb.finish_and_clear();

    // Combined view: the three activity charts, as in the per-chat runs,
    // but over every message of every chat
    if !all_scored.is_empty() {
        println!("\n{}", "=== Combined Activity (All Chats) ===".bold());
        report.record(&activity::date_activity(
            &sentiment::messages_per_day(&all_scored),
            "All_Chats",
            save_dir,
        )?);
        report.record(&activity::hourly_activity(
            &sentiment::messages_per_hour(&all_scored),
            "All_Chats",
            save_dir,
        )?);
        report.record(&activity::period_activity(
            &sentiment::messages_per_period(&all_scored),
            "All_Chats",
            save_dir,
        )?);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_per_chat_and_combined_charts() {
        let dir = tempfile::tempdir().unwrap();
        let chat = dir.path().join("weekend.txt");
        fs::write(
            &chat,
            "[3/14/23, 9:05:12 AM] Ana: this is great\n\
             [3/14/23, 9:45:00 AM] Ben: terrible idea\n\
             [3/15/23, 22:10:00] Ana: good night all\n",
        )
        .unwrap();
        let save_dir = dir.path().join("figures");

        let report = run(&[&chat], &save_dir).unwrap();

        assert_eq!(report.chats, 1);
        assert_eq!(report.messages, 3);
        assert!(save_dir.join("weekend_date_activity.png").exists());
        assert!(save_dir.join("weekend_hourly_activity.png").exists());
        assert!(save_dir.join("weekend_period_activity.png").exists());
        assert!(save_dir.join("weekend_user_sentiment.png").exists());
        assert!(save_dir.join("weekend_sentiment_distribution.png").exists());
        assert!(save_dir.join("All_Chats_date_activity.png").exists());
    }

    #[test]
    fn unparseable_chat_reports_empty_and_renders_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let chat = dir.path().join("noise.txt");
        fs::write(&chat, "no timestamps anywhere\njust prose\n").unwrap();
        let save_dir = dir.path().join("figures");

        let report = run(&[&chat], &save_dir).unwrap();

        assert_eq!(report.empty_chats, 1);
        assert_eq!(report.rendered, 0);
        assert!(!save_dir.exists());
    }
}
