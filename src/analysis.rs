use crate::error::AnalysisError;
use crate::graph::{self, ChartArtifact};
use crate::loader;
use crate::ratios::{self, RatioReport};
use std::path::Path;

/// Computed ratios plus the charts drawn for them
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub report: RatioReport,
    pub charts: Vec<ChartArtifact>,
}

/// Parse, normalize, compute and plot one uploaded workbook
///
/// Any failure aborts the whole run; charts already written for earlier
/// ratios stay on disk.
pub fn analyze_workbook(
    bytes: &[u8],
    chart_dir: &Path,
    chart_width: u32,
    chart_height: u32,
) -> Result<Analysis, AnalysisError> {
    let mut table = loader::load_table(bytes)?;
    table.normalize_labels();

    let report = ratios::compute_ratios(&table)?;
    let charts = graph::render_charts(&report, chart_dir, chart_width, chart_height)?;

    log::info!(
        "analyzed upload of {} bytes: {} ratios computed, {} missing",
        bytes.len(),
        report.results.len(),
        report.missing.len()
    );

    Ok(Analysis { report, charts })
}
