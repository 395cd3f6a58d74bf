// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SVG summary charts.
//!
//! Two charts are rendered next to the CSV files: the share of time spent
//! in each status across all issues (`jira_status_<label>.svg`) and the
//! duration of each release (`jira_release_durations_<label>.svg`).

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use dw_core::{Release, StatusTable};

use crate::error::{Error, Result};

const CHART_WIDTH_PX: u32 = 1200;
const CHART_HEIGHT_PX: u32 = 640;

struct ChartStyle;

impl ChartStyle {
    const MARGIN: i32 = 16;
    const FONT_FAMILY: &'static str = "sans-serif";
    const CAPTION_FONT_SIZE: i32 = 28;
    const LEGEND_FONT_SIZE: i32 = 18;
    const LEGEND_ROW_HEIGHT: i32 = 28;
    const LEGEND_SWATCH: i32 = 16;
    const X_LABEL_AREA_SIZE: u32 = 64;
    const Y_LABEL_AREA_SIZE: u32 = 64;
    const BACKGROUND: RGBColor = WHITE;
    const BAR: RGBColor = BLUE;
    const BAR_ALPHA: f64 = 0.7;
    /// Arc resolution for pie slices, in radians per polygon edge.
    const ARC_STEP: f64 = PI / 90.0;
}

pub fn status_chart_path(dir: &Path, label: &str) -> PathBuf {
    dir.join(format!("jira_status_{}.svg", label))
}

pub fn release_chart_path(dir: &Path, label: &str) -> PathBuf {
    dir.join(format!("jira_release_durations_{}.svg", label))
}

/// One status' share of the total time.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub status: String,
    pub days: f64,
    /// Percentage of the grand total, 0-100.
    pub percent: f64,
}

impl Slice {
    /// Legend text with percentage and absolute value.
    pub fn caption(&self) -> String {
        format!("{}: {:.2}% ({:.2} days)", self.status, self.percent, self.days)
    }
}

/// Sums each status column and converts the totals to percentages.
///
/// With no recorded time at all every share is zero.
pub fn status_slices(table: &StatusTable) -> Vec<Slice> {
    let totals = table.totals();
    let grand_total: f64 = totals.iter().map(|(_, days)| days).sum();
    totals
        .into_iter()
        .map(|(status, days)| Slice {
            percent: if grand_total > 0.0 {
                days / grand_total * 100.0
            } else {
                0.0
            },
            status,
            days,
        })
        .collect()
}

fn chart_error<E: std::fmt::Debug>(stage: &str) -> impl FnOnce(E) -> Error + '_ {
    move |error| Error::Chart(format!("{} error: {:?}", stage, error))
}

/// Points approximating a pie wedge from `start` to `end` radians.
fn wedge(center: (i32, i32), radius: f64, start: f64, end: f64) -> Vec<(i32, i32)> {
    let steps = ((end - start) / ChartStyle::ARC_STEP).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = start + (end - start) * i as f64 / steps as f64;
        points.push((
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        ));
    }
    points
}

/// Renders the proportion-of-time chart as a pie with a legend.
pub fn render_status_chart(path: &Path, title: &str, slices: &[Slice]) -> Result<()> {
    let root = SVGBackend::new(path, (CHART_WIDTH_PX, CHART_HEIGHT_PX)).into_drawing_area();
    root.fill(&ChartStyle::BACKGROUND)
        .map_err(chart_error("background fill"))?;
    let area = root
        .titled(
            title,
            (ChartStyle::FONT_FAMILY, ChartStyle::CAPTION_FONT_SIZE),
        )
        .map_err(chart_error("caption"))?;

    let (width, height) = area.dim_in_pixel();
    let (pie_area, legend_area) = area.split_horizontally(width / 2);
    let center = ((width / 4) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height * 2) / 4) - f64::from(ChartStyle::MARGIN);

    let mut angle = -PI / 2.0;
    for (i, slice) in slices.iter().enumerate() {
        if slice.percent <= 0.0 {
            continue;
        }
        let sweep = slice.percent / 100.0 * 2.0 * PI;
        pie_area
            .draw(&Polygon::new(
                wedge(center, radius, angle, angle + sweep),
                Palette99::pick(i).filled(),
            ))
            .map_err(chart_error("slice draw"))?;
        angle += sweep;
    }

    let font = (ChartStyle::FONT_FAMILY, ChartStyle::LEGEND_FONT_SIZE).into_font();
    for (i, slice) in slices.iter().enumerate() {
        let y = ChartStyle::MARGIN + i as i32 * ChartStyle::LEGEND_ROW_HEIGHT;
        legend_area
            .draw(&Rectangle::new(
                [
                    (0, y),
                    (ChartStyle::LEGEND_SWATCH, y + ChartStyle::LEGEND_SWATCH),
                ],
                Palette99::pick(i).filled(),
            ))
            .map_err(chart_error("legend swatch"))?;
        legend_area
            .draw(&Text::new(
                slice.caption(),
                (ChartStyle::LEGEND_SWATCH * 2, y),
                font.clone(),
            ))
            .map_err(chart_error("legend text"))?;
    }

    root.present().map_err(chart_error("present"))?;
    Ok(())
}

/// Renders release durations as a bar chart, one bar per release.
///
/// Releases without a start date are drawn with zero height.
pub fn render_release_chart(path: &Path, releases: &[Release]) -> Result<()> {
    if releases.is_empty() {
        return Err(Error::Chart("no releases to render".to_string()));
    }

    let durations: Vec<f64> = releases
        .iter()
        .map(|release| release.duration_days.unwrap_or(0) as f64)
        .collect();
    let y_min = durations.iter().copied().fold(0.0, f64::min);
    let y_max = durations.iter().copied().fold(1.0, f64::max) * 1.1;
    let bar_count = releases.len() as u32;

    let root = SVGBackend::new(path, (CHART_WIDTH_PX, CHART_HEIGHT_PX)).into_drawing_area();
    root.fill(&ChartStyle::BACKGROUND)
        .map_err(chart_error("background fill"))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(ChartStyle::MARGIN)
        .caption(
            "Release Durations",
            (ChartStyle::FONT_FAMILY, ChartStyle::CAPTION_FONT_SIZE),
        )
        .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
        .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
        .build_cartesian_2d((0..bar_count).into_segmented(), y_min..y_max)
        .map_err(chart_error("chart build"))?;

    let release_name = |x: &SegmentValue<u32>| match x {
        SegmentValue::CenterOf(i) => releases
            .get(*i as usize)
            .map(|release| release.name.clone())
            .unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(releases.len())
        .x_label_formatter(&release_name)
        .x_desc("Release")
        .y_desc("Duration (days)")
        .draw()
        .map_err(chart_error("mesh draw"))?;

    chart
        .draw_series(durations.iter().enumerate().map(|(i, days)| {
            let i = i as u32;
            Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *days)],
                ChartStyle::BAR.mix(ChartStyle::BAR_ALPHA).filled(),
            )
        }))
        .map_err(chart_error("series draw"))?;

    root.present().map_err(chart_error("present"))?;
    Ok(())
}

/// Renders both charts under `dir` and returns their paths.
pub fn render_charts(
    dir: &Path,
    label: &str,
    table: &StatusTable,
    releases: &[Release],
) -> Result<(PathBuf, PathBuf)> {
    let status_path = status_chart_path(dir, label);
    let title = format!("Overall Status Distribution - {}", label);
    render_status_chart(&status_path, &title, &status_slices(table))?;

    let release_path = release_chart_path(dir, label);
    render_release_chart(&release_path, releases)?;

    Ok((status_path, release_path))
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
