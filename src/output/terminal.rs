// Colored terminal output for term rankings and run summaries.
//
// This module handles all terminal-specific formatting; the pipelines
// delegate here instead of formatting inline.

use colored::Colorize;

use crate::features::scores::{top_terms, ScoreMap};
use crate::features::Method;

/// Print a ranked table of the highest-scoring terms of one map.
pub fn display_top_terms(title: &str, method: Method, map: &ScoreMap, n: usize) {
    println!(
        "\n{}",
        format!("=== {} Terms: {} ===", method.label(), title).bold()
    );

    if map.is_empty() {
        println!("  {}", "(no terms survived filtering)".dimmed());
        return;
    }

    println!(
        "  {:>4}  {:<24} {:>10}",
        "Rank".dimmed(),
        "Term".dimmed(),
        method.score_axis().dimmed(),
    );
    println!("  {}", "-".repeat(42).dimmed());

    for (i, (term, score)) in top_terms(map, n).iter().enumerate() {
        println!("  {:>4}. {:<24} {:>10.3}", i + 1, term, score);
    }
}

/// Print the per-chat sentiment summary line.
pub fn display_sentiment_summary(title: &str, messages: usize, senders: usize, mean: f64) {
    let mean_str = format!("{mean:+.3}");
    let colored_mean = if mean > 0.05 {
        mean_str.green()
    } else if mean < -0.05 {
        mean_str.red()
    } else {
        mean_str.normal()
    };
    println!(
        "  {}: {} messages from {} senders, mean sentiment {}",
        title.bold(),
        messages,
        senders,
        colored_mean,
    );
}
