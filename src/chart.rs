use crate::error::{AnalyzerError, Result};
use crate::structs::DATE_FORMAT;
use chrono::NaiveDate;
use log::debug;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const CHART_SIZE: (u32, u32) = (800, 600);

/// Renders per-city average temperatures as a PNG bar chart.
///
/// The file is named `avg_temps_<start>_to_<end>.png` with ISO-formatted
/// dates and written into `dir`. One bar per city, in map (alphabetical)
/// order; the title carries the `dd/mm/yyyy` range. Returns the path of the
/// written file.
pub fn render_bar_chart(
    averages: &BTreeMap<String, f64>,
    start: NaiveDate,
    end: NaiveDate,
    dir: &Path,
) -> Result<PathBuf> {
    let output = dir.join(format!("avg_temps_{}_to_{}.png", start, end));
    debug!("Rendering bar chart to {}", output.display());

    let cities: Vec<&str> = averages.keys().map(String::as_str).collect();
    let values: Vec<f64> = averages.values().copied().collect();

    // Baseline 0 stays in view so bar heights read as temperatures.
    let y_max = values.iter().fold(0.0_f64, |a, &b| a.max(b));
    let y_min = values.iter().fold(0.0_f64, |a, &b| a.min(b));
    let y_padding = if (y_max - y_min).abs() > 1e-6 {
        (y_max - y_min) * 0.1
    } else {
        1.0
    };

    // Scoped so the backend's borrow of the path ends before the return.
    {
        let root = BitMapBackend::new(&output, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        let title = format!(
            "Temperatura promedio por ciudad {} - {}",
            start.format(DATE_FORMAT),
            end.format(DATE_FORMAT)
        );

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(
                0..cities.len().max(1),
                y_min - y_padding..y_max + y_padding,
            )
            .map_err(to_chart_error)?;

        chart
            .configure_mesh()
            .x_desc("Ciudad")
            .y_desc("°C")
            .x_labels(cities.len().max(1))
            .x_label_formatter(&|idx: &usize| {
                cities.get(*idx).map(|c| c.to_string()).unwrap_or_default()
            })
            .disable_x_mesh()
            .light_line_style(BLACK.mix(0.15))
            .draw()
            .map_err(to_chart_error)?;

        chart
            .draw_series(values.iter().enumerate().map(|(i, &avg)| {
                Rectangle::new([(i, 0.0), (i + 1, avg)], BLUE.mix(0.6).filled())
            }))
            .map_err(to_chart_error)?;

        root.present().map_err(to_chart_error)?;
    }

    Ok(output)
}

fn to_chart_error<E: std::fmt::Display>(e: E) -> AnalyzerError {
    AnalyzerError::Chart(e.to_string())
}
