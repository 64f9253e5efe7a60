use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use chatlens::config::Config;
use chatlens::pipeline;

/// chatlens: offline analysis for exported chat logs.
///
/// Three independent pipelines: text preprocessing, TF-IDF/Bag-of-Words
/// feature extraction with visualizations, and sentiment/activity
/// analysis of timestamped messages.
#[derive(Parser)]
#[command(name = "chatlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean chat exports: strip metadata, tokenize, remove stopwords,
    /// lemmatize
    Preprocess {
        /// Chat export files to preprocess
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory for the cleaned text files
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Extract BoW/TF-IDF features and render word clouds, bar charts,
    /// and frequency histograms
    Features {
        /// Text files to analyze (one document each)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory for the rendered figures
        #[arg(long)]
        save_dir: Option<PathBuf>,

        /// Vocabulary cap per method
        #[arg(long)]
        max_features: Option<usize>,

        /// Terms per per-document bar chart
        #[arg(long)]
        top_n: Option<usize>,

        /// Terms on the combined bar chart
        #[arg(long)]
        combined_top_n: Option<usize>,

        /// Stopword language for the vectorizers
        #[arg(long)]
        stop_words: Option<String>,
    },

    /// Score per-message sentiment and render activity/sentiment charts
    Sentiment {
        /// A directory of .txt chat exports, or individual files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory for the rendered figures
        #[arg(long)]
        save_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chatlens=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Preprocess { files, out_dir } => {
            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(&config.preprocessed_dir));
            let written = pipeline::preprocess::run(&files, &out_dir)?;
            println!(
                "\n{}",
                format!("All chats processed: {} files written", written.len()).bold()
            );
        }

        Commands::Features {
            files,
            save_dir,
            max_features,
            top_n,
            combined_top_n,
            stop_words,
        } => {
            let opts = pipeline::features::FeatureOptions {
                max_features: max_features.unwrap_or(config.max_features),
                top_n: top_n.unwrap_or(config.top_n),
                combined_top_n: combined_top_n.unwrap_or(config.combined_top_n),
                stop_words: stop_words.unwrap_or(config.stop_words),
                save_dir: save_dir.unwrap_or_else(|| PathBuf::from(&config.save_dir)),
            };
            let report = pipeline::features::run(&files, &opts)?;

            println!("\n{}", "Feature extraction complete.".bold());
            println!("  Documents analyzed: {}", report.documents);
            println!("  Figures written:    {}", report.rendered);
            if report.skipped_empty > 0 {
                println!(
                    "  {}",
                    format!("Skipped (empty input): {}", report.skipped_empty).yellow()
                );
            }
        }

        Commands::Sentiment { inputs, save_dir } => {
            let save_dir = save_dir.unwrap_or_else(|| PathBuf::from(&config.save_dir));

            // A single directory argument means "every .txt inside it"
            let files: Vec<PathBuf> = if inputs.len() == 1 && inputs[0].is_dir() {
                chatlens::corpus::txt_files_in(&inputs[0])?
            } else {
                inputs
            };
            if files.is_empty() {
                anyhow::bail!("no chat files to analyze");
            }

            let report = pipeline::sentiment::run(&files, &save_dir)?;

            println!("\n{}", "Sentiment analysis complete.".bold());
            println!("  Chats analyzed:  {}", report.chats);
            println!("  Messages scored: {}", report.messages);
            println!("  Figures written: {}", report.rendered);
            if report.empty_chats > 0 {
                println!(
                    "  {}",
                    format!("Chats with no parseable messages: {}", report.empty_chats).yellow()
                );
            }
        }
    }

    Ok(())
}
