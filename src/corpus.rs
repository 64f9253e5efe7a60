// Corpus loading — reads each input file fully into memory, in order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// One input file, loaded whole. The text is never mutated after loading;
/// every downstream stage works on derived values.
#[derive(Debug, Clone)]
pub struct Document {
    /// File stem, used as the figure title ("Clima_Jan_June" for
    /// "chats/Clima_Jan_June.txt").
    pub title: String,
    pub text: String,
}

/// Load every path into a `Document`, preserving input order.
///
/// An unreadable path fails the whole call; there is no retry and no
/// partial result for that file.
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Document>> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        documents.push(Document { title, text });
    }
    info!(count = documents.len(), "Loaded corpus");
    Ok(documents)
}

/// Collect the .txt files of a directory, sorted by name for a stable
/// run order. Used by the sentiment pipeline, which takes a chat folder.
pub fn txt_files_in(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;
    let mut paths: Vec<_> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();
    Ok(paths)
}
