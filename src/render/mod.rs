// Chart rendering — every figure the pipelines produce.
//
// Each render function acquires its own drawing area, draws, writes one
// PNG, and releases it; no canvas state is shared between calls, and
// re-rendering with the same inputs overwrites the same file with the
// same bytes. Figures are sized at 300 px per inch of the original
// layouts, which is where the concrete pixel constants come from.

pub mod activity;
pub mod bars;
pub mod histogram;
pub mod sentiment;
pub mod wordcloud;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::style::RGBColor;

/// What a render call did.
///
/// An empty mapping is a legal input: the renderer writes nothing and
/// says so, instead of failing or silently pretending it drew something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered(PathBuf),
    SkippedEmpty,
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }
}

/// `{save_dir}/{title}_{method}_{kind}.png`, the feature-pipeline scheme.
pub fn artifact_path(save_dir: &Path, title: &str, method: &str, kind: &str) -> PathBuf {
    save_dir.join(format!("{title}_{method}_{kind}.png"))
}

/// `{save_dir}/{title}_{kind}.png`, the sentiment/activity scheme.
pub fn chart_path(save_dir: &Path, title: &str, kind: &str) -> PathBuf {
    save_dir.join(format!("{title}_{kind}.png"))
}

/// Create the output directory if it doesn't exist yet. Not an error
/// condition; the first render of a run usually lands here.
pub(crate) fn ensure_dir(save_dir: &Path) -> Result<()> {
    fs::create_dir_all(save_dir)
        .with_context(|| format!("failed to create output directory {}", save_dir.display()))
}

// Fill colors carried over from the original figure styling
pub(crate) const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);
pub(crate) const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
pub(crate) const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
pub(crate) const ORANGE: RGBColor = RGBColor(255, 165, 0);
pub(crate) const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
