//! Bar charts of frequency tables, rendered to SVG.

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::ChartConfig;

/// Labels for one bar chart.
#[derive(Debug, Clone, Copy)]
pub struct BarChart<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
}

/// Draws one bar per `(label, count)` row to `out`.
///
/// Returns `Ok(None)` without touching the filesystem when `rows` is empty.
pub fn render_bar_chart(
    rows: &[(String, usize)],
    chart: &BarChart<'_>,
    size: &ChartConfig,
    out: &Path,
) -> Result<Option<PathBuf>> {
    if rows.is_empty() {
        tracing::warn!("No data to plot for {}", chart.title);
        return Ok(None);
    }

    draw(rows, chart, size, out)
        .map_err(|e| anyhow!("render chart {}: {}", out.display(), e))?;
    tracing::debug!(path = %out.display(), bars = rows.len(), "chart written");
    Ok(Some(out.to_path_buf()))
}

fn draw(
    rows: &[(String, usize)],
    chart: &BarChart<'_>,
    size: &ChartConfig,
    out: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let y_max = rows.iter().map(|(_, n)| *n).max().unwrap_or(0) + 1;

    let root = SVGBackend::new(out, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(90)
        .y_label_area_size(60)
        .build_cartesian_2d((0..rows.len()).into_segmented(), 0..y_max)?;

    let x_label = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => rows.get(*i).map(|(l, _)| l.clone()).unwrap_or_default(),
        _ => String::new(),
    };

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len())
        .x_label_formatter(&x_label)
        .x_desc(chart.x_label)
        .y_desc("Count")
        .draw()?;

    ctx.draw_series(rows.iter().enumerate().map(|(i, (_, n))| {
        Rectangle::new(
            [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), *n)],
            BLUE.mix(0.7).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
