// Top-N term bar charts: horizontal bars, highest score nearest the
// axis origin, labeled inside the chart area.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::features::scores::{top_terms, ScoreMap};
use crate::features::Method;

use super::{artifact_path, ensure_dir, RenderOutcome, LIGHT_CORAL, SKY_BLUE};

const WIDTH: u32 = 3000;
const HEIGHT: u32 = 1800;

/// Render the top-N horizontal bar chart for one score map.
///
/// Draws exactly `min(top_n, map.len())` bars, sorted descending; the
/// highest-scoring term sits at the bottom, next to the origin.
pub fn top_terms_chart(
    map: &ScoreMap,
    title: &str,
    method: Method,
    top_n: usize,
    save_dir: &Path,
) -> Result<RenderOutcome> {
    let ranked = top_terms(map, top_n);
    if ranked.is_empty() || ranked[0].1 <= 0.0 {
        return Ok(RenderOutcome::SkippedEmpty);
    }

    ensure_dir(save_dir)?;
    let path = artifact_path(save_dir, title, method.label(), "topwords");

    {
        let root = BitMapBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let n = ranked.len();
        let max_score = ranked[0].1;
        let color = match method {
            Method::Bow => LIGHT_CORAL,
            Method::TfIdf => SKY_BLUE,
        };

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Top {n} {} Terms: {title}", method.label()),
                ("sans-serif", 56),
            )
            .margin(30)
            .x_label_area_size(90)
            .y_label_area_size(40)
            .build_cartesian_2d(0.0..max_score * 1.05, 0.0..n as f64)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(0)
            .x_desc(method.score_axis())
            .x_label_style(("sans-serif", 36))
            .axis_desc_style(("sans-serif", 40))
            .draw()?;

        // Bar at index 0 (highest score) occupies the band closest to y = 0
        for (i, (term, score)) in ranked.iter().enumerate() {
            let y0 = i as f64 + 0.12;
            let y1 = i as f64 + 0.88;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(0.0, y0), (*score, y1)],
                color.filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                term.clone(),
                (max_score * 0.012, i as f64 + 0.32),
                ("sans-serif", 38).into_font().color(&BLACK),
            )))?;
        }

        root.present()?;
    }
    Ok(RenderOutcome::Rendered(path))
}
