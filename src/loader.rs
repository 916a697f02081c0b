use crate::error::AnalysisError;
use crate::table::{CellValue, FinancialTable, Label};
use calamine::{Data, DataType, Reader, Sheets, open_workbook_auto_from_rs};
use chrono::NaiveDate;
use std::io::Cursor;

/// Load a financial table from an uploaded workbook
///
/// Reads the first worksheet of any format calamine recognizes (xlsx, xlsm,
/// xlsb, xls, ods). Row 0 holds the period headers and column 0 holds the
/// line-item labels; the top-left cell is the index name and is skipped.
///
/// # Arguments
/// * `bytes` - Raw content of the uploaded file
///
/// # Returns
/// * `Result<FinancialTable, AnalysisError>` - The parsed table or an error
///
/// # Examples
/// ```no_run
/// use ratiosheet::loader::load_table;
///
/// let bytes = std::fs::read("statements.xlsx").unwrap();
/// match load_table(&bytes) {
///     Ok(table) => println!("Loaded {} line items", table.rows.len()),
///     Err(e) => eprintln!("Error loading workbook: {}", e),
/// }
/// ```
pub fn load_table(bytes: &[u8]) -> Result<FinancialTable, AnalysisError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Sheets<_> = open_workbook_auto_from_rs(cursor)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(AnalysisError::NoWorksheet)??;

    let mut rows = range.rows();
    let header = rows.next().ok_or(AnalysisError::EmptySheet)?;

    let columns: Vec<Label> = header
        .iter()
        .enumerate()
        .skip(1)
        .map(|(position, cell)| header_label(cell, position))
        .collect();

    let mut table = FinancialTable::new(columns);

    for row in rows {
        let label = row.first().map(index_label).unwrap_or(Label::Empty);
        let cells: Vec<CellValue> = row.iter().skip(1).map(cell_value).collect();

        // Trailing blank rows carry nothing
        if label == Label::Empty && cells.iter().all(|c| *c == CellValue::Empty) {
            continue;
        }

        table.push_row(label, cells);
    }

    log::debug!(
        "loaded table with {} periods and {} line items",
        table.period_count(),
        table.rows.len()
    );

    Ok(table)
}

// Column headers: blanks get a positional placeholder name
fn header_label(cell: &Data, position: usize) -> Label {
    match data_label(cell) {
        Label::Empty => Label::Text(format!("Unnamed: {}", position)),
        label => label,
    }
}

fn index_label(cell: &Data) -> Label {
    data_label(cell)
}

fn data_label(cell: &Data) -> Label {
    match cell {
        Data::String(s) => Label::Text(s.clone()),
        Data::Int(i) => Label::Int(*i),
        Data::Float(f) => float_label(*f),
        Data::Bool(b) => Label::Text(if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(dt) => match excel_date(cell) {
            Some(date) => Label::Date(date),
            None => float_label(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match excel_date(cell) {
            Some(date) => Label::Date(date),
            None => Label::Text(s.clone()),
        },
        Data::DurationIso(s) => Label::Text(s.clone()),
        Data::Error(_) | Data::Empty => Label::Empty,
    }
}

// Excel keeps every number as a float; whole values read as integers
fn float_label(f: f64) -> Label {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Label::Int(f as i64)
    } else {
        Label::Float(f)
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::String(s) => match s.trim().parse::<f64>() {
            Ok(n) => CellValue::Number(n),
            Err(_) if s.trim().is_empty() => CellValue::Empty,
            Err(_) => CellValue::Text(s.clone()),
        },
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}

/// Calendar date of a date-typed cell (Excel serial or ISO 8601 text)
///
/// Plain numbers are not dates here, even though calamine could read them as
/// serials: a `2021` header must stay a year.
pub fn excel_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(_) | Data::DateTimeIso(_) => cell.as_date(),
        _ => None,
    }
}
