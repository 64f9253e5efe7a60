// Sentiment charts: mean polarity per sender and the polarity
// distribution across all messages of a chat.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use super::{chart_path, ensure_dir, RenderOutcome, ORANGE, STEEL_BLUE};

const WIDTH: u32 = 3600;
const HEIGHT: u32 = 2400;
const DIST_BINS: usize = 40;

/// Horizontal bars of mean polarity per sender, most negative nearest
/// the origin, with the zero line marked.
pub fn user_sentiment(
    means: &[(String, f64)],
    title: &str,
    save_dir: &Path,
) -> Result<RenderOutcome> {
    if means.is_empty() {
        return Ok(RenderOutcome::SkippedEmpty);
    }

    ensure_dir(save_dir)?;
    let path = chart_path(save_dir, title, "user_sentiment");

    {
        let root = BitMapBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let n = means.len();
        let min_mean = means
            .iter()
            .map(|(_, m)| *m)
            .fold(f64::MAX, f64::min)
            .min(0.0);
        let max_mean = means
            .iter()
            .map(|(_, m)| *m)
            .fold(f64::MIN, f64::max)
            .max(0.0);
        // Keep a margin on both sides so bars never touch the frame
        let x_lo = min_mean - 0.1;
        let x_hi = max_mean + 0.1;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Sentiment Analysis by User: {title}"),
                ("sans-serif", 64),
            )
            .margin(40)
            .x_label_area_size(130)
            .y_label_area_size(40)
            .build_cartesian_2d(x_lo..x_hi, 0.0..n as f64)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(0)
            .x_desc("Sentiment Score")
            .x_label_style(("sans-serif", 36))
            .axis_desc_style(("sans-serif", 44))
            .draw()?;

        for (i, (sender, mean)) in means.iter().enumerate() {
            let (x0, x1) = if *mean < 0.0 { (*mean, 0.0) } else { (0.0, *mean) };
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x0, i as f64 + 0.15), (x1, i as f64 + 0.85)],
                ORANGE.mix(0.7).filled(),
            )))?;
            // Sender label sits on the opposite side of the zero line
            let label_x = if *mean < 0.0 { 0.015 } else { x_lo + 0.015 };
            chart.draw_series(std::iter::once(Text::new(
                sender.clone(),
                (label_x, i as f64 + 0.35),
                ("sans-serif", 40).into_font().color(&BLACK),
            )))?;
        }

        // Zero reference line
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), (0.0, n as f64)],
            BLACK.mix(0.5).stroke_width(3),
        )))?;

        root.present()?;
    }
    Ok(RenderOutcome::Rendered(path))
}

/// Histogram of message polarities over [-1, 1] with the mean marked.
pub fn sentiment_distribution(
    polarities: &[f64],
    title: &str,
    save_dir: &Path,
) -> Result<RenderOutcome> {
    if polarities.is_empty() {
        return Ok(RenderOutcome::SkippedEmpty);
    }

    ensure_dir(save_dir)?;
    let path = chart_path(save_dir, title, "sentiment_distribution");

    {
        let root = BitMapBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let bin_width = 2.0 / DIST_BINS as f64;
        let mut counts = [0u64; DIST_BINS];
        for p in polarities {
            let mut bin = ((p + 1.0) / bin_width) as usize;
            if bin >= DIST_BINS {
                bin = DIST_BINS - 1;
            }
            counts[bin] += 1;
        }
        let max_count = *counts.iter().max().unwrap();
        let mean = polarities.iter().sum::<f64>() / polarities.len() as f64;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Sentiment Distribution: {title}"),
                ("sans-serif", 64),
            )
            .margin(40)
            .x_label_area_size(130)
            .y_label_area_size(120)
            .build_cartesian_2d(-1.0..1.0, 0u64..max_count + max_count / 5 + 1)?;

        chart
            .configure_mesh()
            .x_desc("Sentiment Score")
            .y_desc("Frequency")
            .x_label_style(("sans-serif", 36))
            .y_label_style(("sans-serif", 36))
            .axis_desc_style(("sans-serif", 44))
            .draw()?;

        chart.draw_series(counts.iter().enumerate().filter(|(_, c)| **c > 0).map(
            |(i, c)| {
                let x0 = -1.0 + i as f64 * bin_width;
                Rectangle::new([(x0, 0), (x0 + bin_width, *c)], STEEL_BLUE.mix(0.6).filled())
            },
        ))?;
        chart.draw_series(counts.iter().enumerate().filter(|(_, c)| **c > 0).map(
            |(i, c)| {
                let x0 = -1.0 + i as f64 * bin_width;
                Rectangle::new([(x0, 0), (x0 + bin_width, *c)], BLACK.stroke_width(2))
            },
        ))?;

        // Mean polarity marker
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(mean, 0), (mean, max_count + max_count / 5 + 1)],
            RED.stroke_width(5),
        )))?;

        root.present()?;
    }
    Ok(RenderOutcome::Rendered(path))
}
