// Frequency-distribution histogram for count-based scores: fixed bin
// count, logarithmic vertical axis.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::features::scores::ScoreMap;

use super::{artifact_path, ensure_dir, RenderOutcome, LIGHT_GREEN};

const WIDTH: u32 = 3000;
const HEIGHT: u32 = 1500;
const BINS: usize = 30;

/// Render the word-frequency distribution for a count score map.
///
/// Only meaningful for Bag-of-Words scores, so the artifact is always
/// named with the BoW method label.
pub fn frequency_distribution(
    map: &ScoreMap,
    title: &str,
    save_dir: &Path,
) -> Result<RenderOutcome> {
    if map.is_empty() {
        return Ok(RenderOutcome::SkippedEmpty);
    }

    let values: Vec<f64> = map.values().copied().collect();
    let max_value = values.iter().cloned().fold(f64::MIN, f64::max);
    let min_value = values.iter().cloned().fold(f64::MAX, f64::min);
    if max_value <= 0.0 {
        return Ok(RenderOutcome::SkippedEmpty);
    }

    // Bin the score values. A degenerate all-equal distribution still
    // gets one non-empty bin of unit width.
    let span = max_value - min_value;
    let bin_width = if span > 0.0 { span / BINS as f64 } else { 1.0 };
    let mut counts = [0u64; BINS];
    for v in &values {
        let mut bin = ((v - min_value) / bin_width) as usize;
        if bin >= BINS {
            bin = BINS - 1;
        }
        counts[bin] += 1;
    }
    let max_count = *counts.iter().max().unwrap_or(&1);

    ensure_dir(save_dir)?;
    let path = artifact_path(save_dir, title, "BoW", "freq_distribution");

    {
        let root = BitMapBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Word Frequency Distribution: {title}"),
                ("sans-serif", 56),
            )
            .margin(30)
            .x_label_area_size(90)
            .y_label_area_size(110)
            .build_cartesian_2d(
                min_value..min_value + bin_width * BINS as f64,
                (0.9..max_count as f64 * 1.5).log_scale(),
            )?;

        chart
            .configure_mesh()
            .x_desc("Frequency")
            .y_desc("Number of Words")
            .x_label_style(("sans-serif", 36))
            .y_label_style(("sans-serif", 36))
            .axis_desc_style(("sans-serif", 40))
            .draw()?;

        // Log axis can't reach zero, so empty bins are simply not drawn
        chart.draw_series(counts.iter().enumerate().filter(|(_, c)| **c > 0).map(
            |(i, c)| {
                let x0 = min_value + i as f64 * bin_width;
                let x1 = x0 + bin_width;
                Rectangle::new([(x0, 0.9), (x1, *c as f64)], LIGHT_GREEN.filled())
            },
        ))?;
        chart.draw_series(counts.iter().enumerate().filter(|(_, c)| **c > 0).map(
            |(i, c)| {
                let x0 = min_value + i as f64 * bin_width;
                let x1 = x0 + bin_width;
                Rectangle::new([(x0, 0.9), (x1, *c as f64)], BLACK.stroke_width(2))
            },
        ))?;

        root.present()?;
    }
    Ok(RenderOutcome::Rendered(path))
}
