// Word-cloud rendering: every term drawn at a size proportional to its
// score, packed with a deterministic greedy spiral so identical inputs
// produce identical images.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::features::scores::{top_terms, ScoreMap};
use crate::features::Method;

use super::{artifact_path, ensure_dir, RenderOutcome, STEEL_BLUE};

const WIDTH: u32 = 3000;
const HEIGHT: u32 = 1500;
const TITLE_AREA: i32 = 140;
const MIN_FONT: f64 = 30.0;
const MAX_FONT: f64 = 220.0;

/// A word placed on the canvas: top-left corner plus its box.
struct Placed {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Placed {
    fn overlaps(&self, other: &Placed) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Render a word cloud for one score map.
///
/// Empty mappings (and all-zero mappings) are reported as `SkippedEmpty`
/// without touching the filesystem.
pub fn word_cloud(
    map: &ScoreMap,
    title: &str,
    method: Method,
    save_dir: &Path,
) -> Result<RenderOutcome> {
    let ranked: Vec<(String, f64)> = top_terms(map, map.len())
        .into_iter()
        .filter(|(_, s)| *s > 0.0)
        .collect();
    if ranked.is_empty() {
        return Ok(RenderOutcome::SkippedEmpty);
    }

    ensure_dir(save_dir)?;
    let path = artifact_path(save_dir, title, method.label(), "wordcloud");

    {
        let root = BitMapBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        root.draw(&Text::new(
            format!("{} Word Cloud: {}", method.label(), title),
            (40, 40),
            ("sans-serif", 56).into_font().color(&BLACK),
        ))?;

        let max_score = ranked[0].1;
        let palette = [
            STEEL_BLUE,
            RGBColor(178, 34, 34),
            RGBColor(34, 139, 34),
            RGBColor(148, 0, 211),
            RGBColor(205, 133, 63),
            RGBColor(0, 139, 139),
        ];

        let mut placed: Vec<Placed> = Vec::new();
        for (i, (term, score)) in ranked.iter().enumerate() {
            let size = MIN_FONT + (MAX_FONT - MIN_FONT) * (score / max_score);
            // Rough glyph box; wide enough that neighbors never collide
            let w = (size * 0.58 * term.chars().count() as f64).ceil() as i32;
            let h = (size * 1.15).ceil() as i32;

            if let Some(spot) = find_spot(&placed, i, w, h) {
                let color = palette[i % palette.len()];
                root.draw(&Text::new(
                    term.clone(),
                    (spot.x, spot.y),
                    ("sans-serif", size as i32).into_font().color(&color),
                ))?;
                placed.push(spot);
            }
            // A term that fits nowhere is dropped; smaller ones may still fit
        }

        root.present()?;
    }
    Ok(RenderOutcome::Rendered(path))
}

/// Walk an archimedean spiral out from the canvas center until the box
/// fits without overlap. The start angle varies with the word's rank so
/// placements fan out instead of stacking along one ray.
fn find_spot(placed: &[Placed], rank: usize, w: i32, h: i32) -> Option<Placed> {
    let cx = WIDTH as f64 / 2.0;
    let cy = (HEIGHT as f64 + TITLE_AREA as f64) / 2.0;
    let start = rank as f64 * 0.9;

    let mut t = 0.0f64;
    while t < 220.0 {
        let radius = 6.0 * t;
        let angle = start + t;
        let x = (cx + radius * angle.cos() - w as f64 / 2.0) as i32;
        // Flatten the spiral vertically to match the 2:1 canvas
        let y = (cy + radius * 0.5 * angle.sin() - h as f64 / 2.0) as i32;

        let candidate = Placed { x, y, w, h };
        let in_bounds = x >= 10
            && y >= TITLE_AREA
            && x + w <= WIDTH as i32 - 10
            && y + h <= HEIGHT as i32 - 10;
        if in_bounds && !placed.iter().any(|p| p.overlaps(&candidate)) {
            return Some(candidate);
        }
        t += 0.35;
    }
    None
}
