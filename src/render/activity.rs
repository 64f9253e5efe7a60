// Message-activity charts: per-day line, per-hour bars, 2-hour-period
// bars.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;

use super::{chart_path, ensure_dir, RenderOutcome, LIGHT_GREEN, SKY_BLUE, STEEL_BLUE};

const WIDTH: u32 = 3600;
const HEIGHT: u32 = 2400;

/// Messages-per-day line chart with point markers.
pub fn date_activity(
    counts: &BTreeMap<NaiveDate, u64>,
    title: &str,
    save_dir: &Path,
) -> Result<RenderOutcome> {
    if counts.is_empty() {
        return Ok(RenderOutcome::SkippedEmpty);
    }

    ensure_dir(save_dir)?;
    let path = chart_path(save_dir, title, "date_activity");

    {
        let root = BitMapBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        // Pad one day on each side so single-day chats still get a real axis
        let first = *counts.keys().next().unwrap() - Duration::days(1);
        let last = *counts.keys().next_back().unwrap() + Duration::days(1);
        let max_count = *counts.values().max().unwrap();

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Message Activity Over Time: {title}"),
                ("sans-serif", 64),
            )
            .margin(40)
            .x_label_area_size(130)
            .y_label_area_size(120)
            .build_cartesian_2d(first..last, 0u64..max_count + max_count / 5 + 1)?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Number of Messages")
            .x_label_formatter(&|d: &NaiveDate| d.format("%b %d").to_string())
            .x_label_style(("sans-serif", 36))
            .y_label_style(("sans-serif", 36))
            .axis_desc_style(("sans-serif", 44))
            .draw()?;

        chart.draw_series(LineSeries::new(
            counts.iter().map(|(d, c)| (*d, *c)),
            STEEL_BLUE.stroke_width(4),
        ))?;
        chart.draw_series(
            counts
                .iter()
                .map(|(d, c)| Circle::new((*d, *c), 8, STEEL_BLUE.filled())),
        )?;

        root.present()?;
    }
    Ok(RenderOutcome::Rendered(path))
}

/// Messages-per-hour bar chart (24 buckets).
pub fn hourly_activity(counts: &[u64; 24], title: &str, save_dir: &Path) -> Result<RenderOutcome> {
    if counts.iter().all(|&c| c == 0) {
        return Ok(RenderOutcome::SkippedEmpty);
    }

    ensure_dir(save_dir)?;
    let path = chart_path(save_dir, title, "hourly_activity");
    bar_chart(
        &path,
        &format!("Message Activity by Hour: {title}"),
        "Hour of Day",
        counts,
        SKY_BLUE,
        &|i| format!("{i}:00"),
    )?;
    Ok(RenderOutcome::Rendered(path))
}

/// Messages per 2-hour period (12 buckets).
pub fn period_activity(counts: &[u64; 12], title: &str, save_dir: &Path) -> Result<RenderOutcome> {
    if counts.iter().all(|&c| c == 0) {
        return Ok(RenderOutcome::SkippedEmpty);
    }

    ensure_dir(save_dir)?;
    let path = chart_path(save_dir, title, "period_activity");
    bar_chart(
        &path,
        &format!("Message Activity by 2-Hour Periods: {title}"),
        "Time Period",
        counts,
        LIGHT_GREEN,
        &|i| format!("{}-{}:00", i * 2, i * 2 + 2),
    )?;
    Ok(RenderOutcome::Rendered(path))
}

/// Shared vertical bar chart over fixed integer buckets.
fn bar_chart(
    path: &Path,
    caption: &str,
    x_desc: &str,
    counts: &[u64],
    fill: RGBColor,
    label_of: &dyn Fn(usize) -> String,
) -> Result<()> {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = counts.len() as i32;
    let max_count = *counts.iter().max().unwrap_or(&1);

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 64))
        .margin(40)
        .x_label_area_size(130)
        .y_label_area_size(120)
        .build_cartesian_2d(0i32..n, 0u64..max_count + max_count / 5 + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(counts.len())
        .x_desc(x_desc)
        .y_desc("Number of Messages")
        .x_label_formatter(&|i: &i32| {
            if *i >= 0 && (*i as usize) < counts.len() {
                label_of(*i as usize)
            } else {
                String::new()
            }
        })
        .x_label_style(("sans-serif", 34))
        .y_label_style(("sans-serif", 36))
        .axis_desc_style(("sans-serif", 44))
        .draw()?;

    chart.draw_series(counts.iter().enumerate().filter(|(_, c)| **c > 0).map(
        |(i, c)| {
            Rectangle::new([(i as i32, 0), (i as i32 + 1, *c)], fill.mix(0.7).filled())
        },
    ))?;
    chart.draw_series(counts.iter().enumerate().filter(|(_, c)| **c > 0).map(
        |(i, c)| Rectangle::new([(i as i32, 0), (i as i32 + 1, *c)], BLACK.stroke_width(2)),
    ))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            date_activity(&BTreeMap::new(), "Empty", dir.path()).unwrap(),
            RenderOutcome::SkippedEmpty
        );
        assert_eq!(
            hourly_activity(&[0; 24], "Empty", dir.path()).unwrap(),
            RenderOutcome::SkippedEmpty
        );
        assert_eq!(
            period_activity(&[0; 12], "Empty", dir.path()).unwrap(),
            RenderOutcome::SkippedEmpty
        );
    }

    #[test]
    fn single_day_chat_renders() {
        let dir = tempfile::tempdir().unwrap();
        let mut counts = BTreeMap::new();
        counts.insert(NaiveDate::from_ymd_opt(2023, 3, 14).unwrap(), 7u64);
        let outcome = date_activity(&counts, "OneDay", dir.path()).unwrap();
        assert!(outcome.is_rendered());
    }

    #[test]
    fn hourly_chart_renders() {
        let dir = tempfile::tempdir().unwrap();
        let mut counts = [0u64; 24];
        counts[9] = 12;
        counts[21] = 3;
        let outcome = hourly_activity(&counts, "Demo", dir.path()).unwrap();
        match outcome {
            RenderOutcome::Rendered(path) => {
                assert!(path.ends_with("Demo_hourly_activity.png"))
            }
            RenderOutcome::SkippedEmpty => panic!("expected a rendered chart"),
        }
    }
}
