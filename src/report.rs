use crate::graph::ChartArtifact;
use crate::ratios::RatioReport;
use serde::Serialize;

/// URL prefix under which the chart directory is served
pub const CHART_URL_PREFIX: &str = "/static/charts";

/// Everything the results page can show. All fields may be empty.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ResultsView {
    pub results: Vec<RatioView>,
    pub chart_paths: Vec<ChartView>,
    pub missing_data: Vec<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RatioView {
    pub name: String,
    pub values: Vec<PointView>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PointView {
    pub period: String,
    pub value: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ChartView {
    pub name: String,
    pub url: String,
}

impl ResultsView {
    pub fn new(report: &RatioReport, charts: &[ChartArtifact]) -> Self {
        let results = report
            .results
            .iter()
            .map(|result| RatioView {
                name: result.name.clone(),
                values: result
                    .points
                    .iter()
                    .map(|(period, value)| PointView {
                        period: period.to_string(),
                        value: format_value(*value),
                    })
                    .collect(),
            })
            .collect();

        let chart_paths = charts
            .iter()
            .map(|chart| ChartView {
                name: chart.name.clone(),
                url: chart_url(&chart.file_name),
            })
            .collect();

        Self {
            results,
            chart_paths,
            missing_data: report.missing.clone(),
        }
    }
}

/// Public URL of a chart file; names contain `%` and `&`, so encode them
pub fn chart_url(file_name: &str) -> String {
    format!("{}/{}", CHART_URL_PREFIX, urlencoding::encode(file_name))
}

/// Display form of a ratio value
///
/// Whole numbers keep one decimal (`10.0`), everything else uses the
/// shortest representation that round-trips.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(feature = "web")]
pub use page::ResultsPage;

#[cfg(feature = "web")]
mod page {
    use super::ResultsView;
    use crate::error::AnalysisError;
    use handlebars::Handlebars;

    const RESULTS_TEMPLATE: &str = "results";

    /// The compiled results template
    pub struct ResultsPage {
        registry: Handlebars<'static>,
    }

    impl ResultsPage {
        pub fn new() -> Result<Self, AnalysisError> {
            let mut registry = Handlebars::new();
            registry
                .register_template_string(
                    RESULTS_TEMPLATE,
                    include_str!("./templates/results.hbs"),
                )
                .map_err(|e| AnalysisError::Template(e.to_string()))?;
            Ok(Self { registry })
        }

        pub fn render(&self, view: &ResultsView) -> Result<String, AnalysisError> {
            self.registry
                .render(RESULTS_TEMPLATE, view)
                .map_err(|e| AnalysisError::Template(e.to_string()))
        }
    }
}
