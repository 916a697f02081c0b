use chrono::NaiveDate;
use std::fmt;

/// Row or column label of a financial table
///
/// Header cells keep the type they had in the workbook, so a year column
/// stays `Int(2021)` and is never touched by whitespace normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum Label {
    Text(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Empty,
}

impl Label {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Label::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Trims surrounding whitespace on text labels, leaves anything else alone
    pub fn trimmed(self) -> Label {
        match self {
            Label::Text(s) => {
                let trimmed = s.trim();
                if trimmed.len() == s.len() {
                    Label::Text(s)
                } else {
                    Label::Text(trimmed.to_string())
                }
            }
            other => other,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(s) => write!(f, "{}", s),
            Label::Int(i) => write!(f, "{}", i),
            Label::Float(x) => write!(f, "{}", x),
            Label::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Label::Empty => Ok(()),
        }
    }
}

/// A single data cell
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

/// Line items (rows) by period (columns).
///
/// Built once per upload. Every row holds exactly one cell per column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FinancialTable {
    pub columns: Vec<Label>,
    pub rows: Vec<(Label, Vec<CellValue>)>,
}

impl FinancialTable {
    pub fn new(columns: Vec<Label>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating its cells to the column count.
    pub fn push_row(&mut self, label: Label, mut cells: Vec<CellValue>) {
        cells.resize(self.columns.len(), CellValue::Empty);
        self.rows.push((label, cells));
    }

    /// Strips whitespace around string labels on both axes
    pub fn normalize_labels(&mut self) {
        self.columns = std::mem::take(&mut self.columns)
            .into_iter()
            .map(Label::trimmed)
            .collect();

        for (label, _) in self.rows.iter_mut() {
            *label = std::mem::replace(label, Label::Empty).trimmed();
        }
    }

    /// Exact, case-sensitive lookup of a line item. The first match wins.
    pub fn row(&self, key: &str) -> Option<&[CellValue]> {
        self.rows
            .iter()
            .find(|(label, _)| label.as_text() == Some(key))
            .map(|(_, cells)| cells.as_slice())
    }

    pub fn period_count(&self) -> usize {
        self.columns.len()
    }
}
