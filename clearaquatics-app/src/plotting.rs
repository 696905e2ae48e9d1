//! Renders water-parameter history charts to PNG.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use clearaquatics_core::history::{display_name, CombinedRow};
use clearaquatics_schemas::water::{ParameterStatus, WaterParameter};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// One color per parameter, cycled when there are more parameters than colors.
const PALETTE: [RGBColor; 8] = [
    RGBColor(37, 99, 235),
    RGBColor(220, 38, 38),
    RGBColor(22, 163, 74),
    RGBColor(202, 138, 4),
    RGBColor(147, 51, 234),
    RGBColor(194, 65, 12),
    RGBColor(8, 145, 178),
    RGBColor(190, 18, 60),
];

const BAND_COLOR: RGBColor = RGBColor(22, 163, 74);

fn status_color(status: ParameterStatus) -> RGBColor {
    match status {
        ParameterStatus::Good => RGBColor(22, 163, 74),
        ParameterStatus::Warning => RGBColor(234, 179, 8),
        ParameterStatus::Critical => RGBColor(220, 38, 38),
    }
}

/// Pads a value range so points never sit on the frame.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let pad = if hi > lo { (hi - lo) * 0.1 } else { lo.abs().max(1.0) * 0.1 };
    (lo - pad, hi + pad)
}

/// Parameter keys are free-form; keep only characters safe in a file name.
fn file_stem(parameter: &str) -> String {
    parameter
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

fn day_offset(origin: NaiveDate, date: NaiveDate) -> i64 {
    (date - origin).num_days()
}

/// Line chart of one parameter, oldest reading first, with the ideal band of
/// the newest reading drawn as reference lines and each point colored by its
/// status. Returns `None` when there is nothing to draw.
pub fn plot_parameter(
    output_dir: &Path,
    parameter: &str,
    series: &[&WaterParameter],
) -> Result<Option<PathBuf>> {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            tracing::warn!("No {} readings in range, skipping chart", parameter);
            return Ok(None);
        }
    };

    let path = output_dir.join(format!("{}_history.png", file_stem(parameter)));
    draw_parameter(&path, parameter, series, first, last)?;
    Ok(Some(path))
}

fn draw_parameter(
    path: &Path,
    parameter: &str,
    series: &[&WaterParameter],
    first: &WaterParameter,
    last: &WaterParameter,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let origin = first.date;
    let span = day_offset(origin, last.date).max(1);
    let values = series.iter().map(|r| r.value);
    let lo = values.clone().fold(last.ideal_min, f64::min);
    let hi = values.fold(last.ideal_max, f64::max);
    let (y_lo, y_hi) = padded(lo, hi);

    let name = display_name(parameter);
    let y_desc = if last.unit.is_empty() { name.clone() } else { format!("{} ({})", name, last.unit) };

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} History", name), ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0i64..span, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(y_desc)
        .x_label_formatter(&|d: &i64| (origin + Duration::days(*d)).format("%m/%d").to_string())
        .draw()?;

    for (label, bound) in [("Ideal Min", last.ideal_min), ("Ideal Max", last.ideal_max)] {
        chart
            .draw_series(LineSeries::new(
                vec![(0, bound), (span, bound)],
                BAND_COLOR.mix(0.5).stroke_width(1),
            ))?
            .label(format!("{} ({}{})", label, bound, last.unit))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BAND_COLOR.mix(0.5)));
    }

    let color = PALETTE[0];
    chart
        .draw_series(LineSeries::new(
            series.iter().map(|r| (day_offset(origin, r.date), r.value)),
            color.stroke_width(2),
        ))?
        .label(name)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));

    chart.draw_series(series.iter().map(|r| {
        Circle::new((day_offset(origin, r.date), r.value), 4, status_color(r.status).filled())
    }))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// All selected parameters on one shared axis, one line each.
pub fn plot_combined(
    output_dir: &Path,
    parameters: &[&str],
    rows: &[CombinedRow],
) -> Result<Option<PathBuf>> {
    let (first, last) = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            tracing::warn!("No readings in range, skipping combined chart");
            return Ok(None);
        }
    };

    let path = output_dir.join("combined_history.png");
    draw_combined(&path, parameters, rows, first, last)?;
    Ok(Some(path))
}

fn draw_combined(
    path: &Path,
    parameters: &[&str],
    rows: &[CombinedRow],
    first: &CombinedRow,
    last: &CombinedRow,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let origin = first.date;
    let span = day_offset(origin, last.date).max(1);
    let all_values = rows.iter().flat_map(|r| r.values.iter().flatten().copied());
    let lo = all_values.clone().fold(f64::INFINITY, f64::min);
    let hi = all_values.fold(f64::NEG_INFINITY, f64::max);
    let (y_lo, y_hi) = padded(lo, hi);

    let mut chart = ChartBuilder::on(&root)
        .caption("Water Parameters", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0i64..span, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Value")
        .x_label_formatter(&|d: &i64| (origin + Duration::days(*d)).format("%m/%d").to_string())
        .draw()?;

    for (column, parameter) in parameters.iter().enumerate() {
        let color = PALETTE[column % PALETTE.len()];
        let points: Vec<(i64, f64)> = rows
            .iter()
            .filter_map(|r| r.values[column].map(|v| (day_offset(origin, r.date), v)))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(display_name(parameter))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
        chart.draw_series(points.into_iter().map(|p| Circle::new(p, 3, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
