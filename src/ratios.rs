use crate::error::AnalysisError;
use crate::table::{CellValue, FinancialTable, Label};

/// A named quotient of two line items, reported as a percentage
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatioDefinition {
    pub name: &'static str,
    pub numerator: &'static str,
    pub denominator: &'static str,
}

impl RatioDefinition {
    const fn new(name: &'static str, numerator: &'static str, denominator: &'static str) -> Self {
        Self {
            name,
            numerator,
            denominator,
        }
    }
}

/// The fixed set of ratios, in report order
pub const RATIO_DEFINITIONS: [RatioDefinition; 8] = [
    RatioDefinition::new("Return on Equity", "Net Income", "Total Shareholder Equity"),
    RatioDefinition::new("Return on Assets", "Net Income", "Total Assets"),
    RatioDefinition::new(
        "Return on Net Assets",
        "Net Income",
        "Property Plant & Equipment",
    ),
    RatioDefinition::new(
        "Return on Invested Capital",
        "NOPAT",
        "Invested Capital (aka Capital Employed)",
    ),
    RatioDefinition::new("Gross Margin", "Gross Profit", "Revenue"),
    RatioDefinition::new("SG&A % of Revenue", "SG&A", "Revenue"),
    RatioDefinition::new("Other Operating Expenses % of Revenue", "Other", "Revenue"),
    RatioDefinition::new("EBITDA Margin", "EBITDA", "Revenue"),
];

/// One computed ratio: a value per period
#[derive(Clone, Debug, PartialEq)]
pub struct RatioResult {
    pub name: String,
    pub points: Vec<(Label, f64)>,
}

impl RatioResult {
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, v)| *v)
    }
}

/// Outcome of running every definition against one table.
///
/// `results` and `missing` never share a name and together cover all of
/// [`RATIO_DEFINITIONS`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatioReport {
    pub results: Vec<RatioResult>,
    pub missing: Vec<String>,
}

impl RatioReport {
    pub fn get(&self, name: &str) -> Option<&RatioResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

/// Computes all ratios defined in [`RATIO_DEFINITIONS`] for the given table
///
/// A ratio whose numerator or denominator row is absent is recorded as
/// missing. A text cell in a row that is used aborts the whole computation.
pub fn compute_ratios(table: &FinancialTable) -> Result<RatioReport, AnalysisError> {
    let mut report = RatioReport::default();

    for definition in RATIO_DEFINITIONS.iter() {
        match compute_ratio(table, definition)? {
            Some(result) => report.results.push(result),
            None => report.missing.push(definition.name.to_string()),
        }
    }

    Ok(report)
}

/// Computes one ratio, or `None` when either line item is absent
pub fn compute_ratio(
    table: &FinancialTable,
    definition: &RatioDefinition,
) -> Result<Option<RatioResult>, AnalysisError> {
    let (Some(numerator), Some(denominator)) = (
        table.row(definition.numerator),
        table.row(definition.denominator),
    ) else {
        return Ok(None);
    };

    let mut points = Vec::with_capacity(table.columns.len());
    for (i, period) in table.columns.iter().enumerate() {
        let n = value_at(numerator, i, definition.numerator, period)?;
        let d = value_at(denominator, i, definition.denominator, period)?;
        points.push((period.clone(), round3(n / d * 100.0)));
    }

    Ok(Some(RatioResult {
        name: definition.name.to_string(),
        points,
    }))
}

// A row shorter than the header reads as empty cells
fn value_at(cells: &[CellValue], i: usize, row: &str, period: &Label) -> Result<f64, AnalysisError> {
    cells
        .get(i)
        .map_or(Ok(f64::NAN), |cell| numeric(cell, row, period))
}

fn numeric(cell: &CellValue, row: &str, period: &Label) -> Result<f64, AnalysisError> {
    match cell {
        CellValue::Number(n) => Ok(*n),
        CellValue::Empty => Ok(f64::NAN),
        CellValue::Text(s) => Err(AnalysisError::NonNumeric {
            row: row.to_string(),
            period: period.to_string(),
            value: s.clone(),
        }),
    }
}

/// Rounds to 3 decimal places, ties to even. Non-finite values pass through.
pub fn round3(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (value * 1000.0).round_ties_even() / 1000.0
}
