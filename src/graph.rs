use crate::error::AnalysisError;
use crate::ratios::{RatioReport, RatioResult};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Configuration options for chart generation
#[derive(Clone, Debug)]
pub struct GraphOptions {
    /// Title displayed at the top of the chart
    pub title: String,

    /// Label for the X-axis
    pub x_label: String,

    /// Label for the Y-axis
    pub y_label: String,

    /// Width of the chart in pixels
    pub width: u32,

    /// Height of the chart in pixels
    pub height: u32,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            title: "Graph".to_string(),
            x_label: "X Axis".to_string(),
            y_label: "Y Axis".to_string(),
            width: 640,
            height: 480,
        }
    }
}

impl GraphOptions {
    /// Options for a ratio chart: periods on X, the ratio in percent on Y
    pub fn for_ratio(name: &str, width: u32, height: u32) -> Self {
        Self {
            title: name.to_string(),
            x_label: "Year".to_string(),
            y_label: format!("{} (%)", name),
            width,
            height,
        }
    }
}

/// A chart written to disk for one ratio
#[derive(Clone, Debug, PartialEq)]
pub struct ChartArtifact {
    pub name: String,
    pub file_name: String,
    pub path: PathBuf,
}

/// File name for a ratio's chart: spaces become underscores
///
/// # Examples
/// ```
/// use ratiosheet::graph::chart_file_name;
///
/// assert_eq!(chart_file_name("Gross Margin"), "Gross_Margin.png");
/// assert_eq!(chart_file_name("SG&A % of Revenue"), "SG&A_%_of_Revenue.png");
/// ```
pub fn chart_file_name(name: &str) -> String {
    format!("{}.png", name.replace(' ', "_"))
}

/// Renders one chart per computed ratio into `dir`
///
/// Existing files with the same name are overwritten. The returned artifacts
/// follow the order of `report.results`.
pub fn render_charts(
    report: &RatioReport,
    dir: &Path,
    width: u32,
    height: u32,
) -> Result<Vec<ChartArtifact>, AnalysisError> {
    let mut artifacts = Vec::with_capacity(report.results.len());

    for result in &report.results {
        let file_name = chart_file_name(&result.name);
        let path = dir.join(&file_name);
        let options = GraphOptions::for_ratio(&result.name, width, height);

        save_ratio_chart(result, &options, &path)?;
        log::debug!("wrote chart {}", path.display());

        artifacts.push(ChartArtifact {
            name: result.name.clone(),
            file_name,
            path,
        });
    }

    Ok(artifacts)
}

/// Saves a line chart of a ratio series to a PNG file
///
/// # Arguments
/// * `result` - The ratio values, one per period
/// * `options` - Chart styling options
/// * `path` - File path where the chart should be saved
///
/// # Implementation Notes
/// * The X-axis is categorical: one segment per period, labeled with the period
/// * Consecutive finite values are joined by lines; inf/NaN values leave gaps
/// * With no finite value at all, an empty 0..1 plot area is drawn
pub fn save_ratio_chart(
    result: &RatioResult,
    options: &GraphOptions,
    path: &Path,
) -> Result<(), AnalysisError> {
    draw_line_chart(result, options, path)
        .map_err(|e| AnalysisError::Chart(format!("{}: {}", result.name, e)))
}

fn draw_line_chart(
    result: &RatioResult,
    options: &GraphOptions,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<String> = result.points.iter().map(|(p, _)| p.to_string()).collect();
    let periods = labels.len().max(1) as i32;
    let (y_min, y_max) = y_bounds(result.values());

    let mut chart = ChartBuilder::on(&root)
        .caption(&options.title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..periods).into_segmented(), y_min..y_max)?;

    let label_at = |value: &SegmentValue<i32>| match value {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len().max(1))
        .x_label_formatter(&label_at)
        .x_desc(&options.x_label)
        .y_desc(&options.y_label)
        .draw()?;

    for run in finite_runs(result) {
        chart.draw_series(LineSeries::new(
            run.iter().map(|&(i, v)| (SegmentValue::CenterOf(i as i32), v)),
            &BLUE,
        ))?;
        chart.draw_series(
            run.iter()
                .map(|&(i, v)| Circle::new((SegmentValue::CenterOf(i as i32), v), 3, BLUE.filled())),
        )?;
    }

    root.present()?;

    Ok(())
}

// Splits the series at non-finite values into drawable runs of (index, value)
fn finite_runs(result: &RatioResult) -> Vec<Vec<(usize, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for (i, value) in result.values().enumerate() {
        if value.is_finite() {
            current.push((i, value));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Y-axis range covering every finite value, with a little headroom
pub fn y_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let finite: Vec<f64> = values.filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return (0.0, 1.0);
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return (min - 1.0, max + 1.0);
    }

    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}
