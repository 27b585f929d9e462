//! SVG chart rendering via plotters
//!
//! Fixed 1000x600 geometry, white background, sans-serif axis styling.
//! All backend errors are flattened into `FigureError::Render`; the
//! figure stage carries no correctness contract beyond drawing what the
//! compute functions produced.

use crate::error::{FigureError, FigureResult};
use crate::types::{Bar, HeatmapGrid, Series};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;

const FIGURE_SIZE: (u32, u32) = (1000, 600);
const AXIS_FONT: (&str, u32) = ("sans-serif", 16);
const LABEL_FONT: (&str, u32) = ("sans-serif", 14);

fn render_err<E: std::fmt::Display>(err: E) -> FigureError {
    FigureError::Render(err.to_string())
}

/// Multi-series line chart with a legend
pub fn line_chart(
    path: &Path,
    series: &[Series],
    x_desc: &str,
    y_desc: &str,
    x_range: Range<i32>,
    y_range: Range<f64>,
) -> FigureResult<()> {
    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .axis_desc_style(AXIS_FONT)
        .label_style(LABEL_FONT)
        .draw()
        .map_err(render_err)?;

    for (idx, entry) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(
                entry.points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(render_err)?
            .label(entry.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .label_font(LABEL_FONT)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Categorical bar chart; long label sets render rotated
pub fn bar_chart(
    path: &Path,
    bars: &[Bar],
    x_desc: &str,
    y_desc: &str,
    rotate_labels: bool,
) -> FigureResult<()> {
    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let y_max = bars
        .iter()
        .map(|bar| bar.value)
        .fold(0.0f64, f64::max)
        .max(f64::MIN_POSITIVE)
        * 1.1;
    let labels: Vec<&str> = bars.iter().map(|bar| bar.label.as_str()).collect();

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(if rotate_labels { 150 } else { 60 })
        .y_label_area_size(80)
        .build_cartesian_2d((0u32..bars.len() as u32).into_segmented(), 0.0..y_max)
        .map_err(render_err)?;

    let x_label_style = if rotate_labels {
        LABEL_FONT.into_font().transform(FontTransform::Rotate90)
    } else {
        LABEL_FONT.into_font().transform(FontTransform::None)
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .axis_desc_style(AXIS_FONT)
        .label_style(LABEL_FONT)
        .x_label_style(x_label_style)
        .x_labels(bars.len())
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(idx) => labels
                .get(*idx as usize)
                .map(|label| label.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(bars.iter().enumerate().map(|(idx, bar)| {
            let mut rect = Rectangle::new(
                [
                    (SegmentValue::Exact(idx as u32), 0.0),
                    (SegmentValue::Exact(idx as u32 + 1), bar.value),
                ],
                Palette99::pick(idx).filled(),
            );
            rect.set_margin(0, 0, 10, 10);
            rect
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Annotated co-occurrence heatmap; grid row 0 is drawn at the top
pub fn heatmap_chart(
    path: &Path,
    grid: &HeatmapGrid,
    x_desc: &str,
    y_desc: &str,
) -> FigureResult<()> {
    let cols = grid.x_labels.len() as u32;
    let rows = grid.y_labels.len() as u32;
    if cols == 0 || rows == 0 {
        return Ok(());
    }

    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(130)
        .y_label_area_size(140)
        .build_cartesian_2d((0u32..cols).into_segmented(), (0u32..rows).into_segmented())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .axis_desc_style(AXIS_FONT)
        .label_style(LABEL_FONT)
        .x_label_style(LABEL_FONT.into_font().transform(FontTransform::Rotate90))
        .x_labels(cols as usize)
        .y_labels(rows as usize)
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(idx) => grid
                .x_labels
                .get(*idx as usize)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(idx) => rows
                .checked_sub(1 + *idx)
                .and_then(|i| grid.y_labels.get(i as usize))
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(grid.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(col, &value)| {
                let y = rows - 1 - row as u32;
                Rectangle::new(
                    [
                        (SegmentValue::Exact(col as u32), SegmentValue::Exact(y)),
                        (SegmentValue::Exact(col as u32 + 1), SegmentValue::Exact(y + 1)),
                    ],
                    coolwarm(value).filled(),
                )
            })
        }))
        .map_err(render_err)?;

    let annotation = LABEL_FONT
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(grid.cells.iter().enumerate().flat_map(|(row, cells)| {
            let style = annotation.clone();
            cells.iter().enumerate().map(move |(col, &value)| {
                let y = rows - 1 - row as u32;
                Text::new(
                    format!("{value:.2}"),
                    (
                        SegmentValue::CenterOf(col as u32),
                        SegmentValue::CenterOf(y),
                    ),
                    style.clone(),
                )
            })
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Blue-through-white-through-red gradient over [0, 1]
fn coolwarm(value: f64) -> RGBColor {
    let v = value.clamp(0.0, 1.0);
    let (from, to, t) = if v < 0.5 {
        ((59u8, 76u8, 192u8), (242u8, 242u8, 242u8), v * 2.0)
    } else {
        ((242u8, 242u8, 242u8), (180u8, 4u8, 38u8), (v - 0.5) * 2.0)
    };
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
