// Preprocessing pipeline: raw chat exports → cleaned token files.
//
// Each input becomes `{out_dir}/preprocessed_{file_name}`, ready for the
// feature-extraction pipeline. Inputs are processed independently; an
// unreadable file fails the run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::corpus;
use crate::preprocess::{lemma::Lemmatizer, preprocess_chat, stopwords::StopwordFilter};

/// Run the preprocessing pass. Returns the written output paths, in
/// input order.
pub fn run<P: AsRef<Path>>(paths: &[P], out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let stopwords = StopwordFilter::english();
    let lemmatizer = Lemmatizer::new();

    let documents = corpus::load_documents(paths)?;

    let mut written = Vec::with_capacity(documents.len());
    for (document, path) in documents.iter().zip(paths) {
        let processed = preprocess_chat(&document.text, &stopwords, &lemmatizer);

        let file_name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.txt", document.title));
        let out_path = out_dir.join(format!("preprocessed_{file_name}"));

        fs::write(&out_path, &processed)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!(
            input = %path.as_ref().display(),
            tokens = processed.split_whitespace().count(),
            "Preprocessed chat"
        );
        println!("Preprocessed chat saved: {}", out_path.display());
        written.push(out_path);
    }

    Ok(written)
}
