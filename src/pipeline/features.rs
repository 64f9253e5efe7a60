// Feature-extraction pipeline: loader → vectorizer → aggregator →
// renderer, once per document plus once for the combined corpus.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use crate::corpus;
use crate::features::scores::{self, ScoreMap};
use crate::features::vectorizer::{CountVectorizer, TfidfVectorizer};
use crate::features::Method;
use crate::output::terminal;
use crate::preprocess::{stopwords::StopwordFilter, tokenize};
use crate::render::{bars, histogram, wordcloud, RenderOutcome};

/// Knobs of the feature pipeline; defaults come from `Config`.
pub struct FeatureOptions {
    pub max_features: usize,
    pub top_n: usize,
    pub combined_top_n: usize,
    pub stop_words: String,
    pub save_dir: PathBuf,
}

/// What one run produced.
#[derive(Debug, Default)]
pub struct FeatureReport {
    pub documents: usize,
    pub rendered: usize,
    pub skipped_empty: usize,
}

impl FeatureReport {
    fn record(&mut self, outcome: &RenderOutcome) {
        match outcome {
            RenderOutcome::Rendered(_) => self.rendered += 1,
            RenderOutcome::SkippedEmpty => self.skipped_empty += 1,
        }
    }
}

/// Exported score maps, written next to the figures as
/// `scores_{method}.json`.
#[derive(Serialize)]
struct ScoreExport<'a> {
    method: &'a str,
    documents: BTreeMap<&'a str, &'a ScoreMap>,
    combined: &'a ScoreMap,
}

/// Run the whole feature pipeline over the given files.
pub fn run<P: AsRef<Path>>(paths: &[P], opts: &FeatureOptions) -> Result<FeatureReport> {
    let documents = corpus::load_documents(paths)?;
    let stopwords = StopwordFilter::for_language(&opts.stop_words)?;

    // Tokenize once; both vectorizers share the token streams
    let token_docs: Vec<Vec<String>> = documents
        .iter()
        .map(|d| stopwords.filter(tokenize::tokenize(&d.text)))
        .collect();

    let bow = CountVectorizer::new(opts.max_features).fit_transform(&token_docs);
    let tfidf = TfidfVectorizer::new(opts.max_features).fit_transform(&token_docs);
    info!(
        documents = documents.len(),
        bow_vocabulary = bow.vocabulary.len(),
        tfidf_vocabulary = tfidf.vocabulary.len(),
        "Vectorized corpus"
    );

    let bow_maps = scores::per_document_maps(&bow);
    let tfidf_maps = scores::per_document_maps(&tfidf);

    let mut report = FeatureReport {
        documents: documents.len(),
        ..Default::default()
    };

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Rendering [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    for (i, document) in documents.iter().enumerate() {
        terminal::display_top_terms(&document.title, Method::Bow, &bow_maps[i], opts.top_n);
        terminal::display_top_terms(&document.title, Method::TfIdf, &tfidf_maps[i], opts.top_n);

        let outcomes = render_document(
            &bow_maps[i],
            &tfidf_maps[i],
            &document.title,
            opts.top_n,
            &opts.save_dir,
        )?;
        for outcome in &outcomes {
            report.record(outcome);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    // Combined view over the whole corpus
    let bow_combined = scores::combine(&bow_maps);
    let tfidf_combined = scores::combine(&tfidf_maps);

    println!("\n{}", "=== Combined Visualizations (All Files) ===".bold());
    terminal::display_top_terms("All_Files", Method::Bow, &bow_combined, opts.combined_top_n);
    terminal::display_top_terms(
        "All_Files",
        Method::TfIdf,
        &tfidf_combined,
        opts.combined_top_n,
    );

    let outcomes = render_document(
        &bow_combined,
        &tfidf_combined,
        "All_Files",
        opts.combined_top_n,
        &opts.save_dir,
    )?;
    for outcome in &outcomes {
        report.record(outcome);
    }

    export_scores(&documents, &bow_maps, &bow_combined, Method::Bow, opts)?;
    export_scores(&documents, &tfidf_maps, &tfidf_combined, Method::TfIdf, opts)?;

    Ok(report)
}

/// Render every artifact for one (BoW map, TF-IDF map) pair: bar chart,
/// word cloud, and frequency histogram for counts; bar chart and word
/// cloud for weights.
fn render_document(
    bow_map: &ScoreMap,
    tfidf_map: &ScoreMap,
    title: &str,
    top_n: usize,
    save_dir: &Path,
) -> Result<Vec<RenderOutcome>> {
    Ok(vec![
        bars::top_terms_chart(bow_map, title, Method::Bow, top_n, save_dir)?,
        wordcloud::word_cloud(bow_map, title, Method::Bow, save_dir)?,
        histogram::frequency_distribution(bow_map, title, save_dir)?,
        bars::top_terms_chart(tfidf_map, title, Method::TfIdf, top_n, save_dir)?,
        wordcloud::word_cloud(tfidf_map, title, Method::TfIdf, save_dir)?,
    ])
}

fn export_scores(
    documents: &[corpus::Document],
    maps: &[ScoreMap],
    combined: &ScoreMap,
    method: Method,
    opts: &FeatureOptions,
) -> Result<()> {
    let export = ScoreExport {
        method: method.label(),
        documents: documents
            .iter()
            .map(|d| d.title.as_str())
            .zip(maps.iter())
            .collect(),
        combined,
    };
    std::fs::create_dir_all(&opts.save_dir).with_context(|| {
        format!("failed to create output directory {}", opts.save_dir.display())
    })?;
    let path = opts.save_dir.join(format!("scores_{}.json", method.label()));
    let file =
        File::create(&path).with_context(|| format!("failed to write {}", path.display()))?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
