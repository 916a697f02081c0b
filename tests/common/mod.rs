#![allow(dead_code)]

use ratiosheet::table::{CellValue, FinancialTable, Label};
use rust_xlsxwriter::Workbook;

/// A cell to place in a generated workbook
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

/// Builds an xlsx file in memory from (row, col, cell) triples
pub fn raw_xlsx(cells: &[(u32, u16, Cell)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    {
        let worksheet = workbook.add_worksheet();
        for (row, col, cell) in cells {
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(*row, *col, *s).unwrap();
                }
                Cell::Number(n) => {
                    worksheet.write_number(*row, *col, *n).unwrap();
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// Builds a statement workbook: years across the header, one line item per row
pub fn statement_xlsx(years: &[f64], rows: &[(&str, &[f64])]) -> Vec<u8> {
    let mut cells = vec![(0u32, 0u16, Cell::Text("Line Item"))];
    for (c, year) in years.iter().enumerate() {
        cells.push((0, (c + 1) as u16, Cell::Number(*year)));
    }
    for (r, (label, values)) in rows.iter().enumerate() {
        let row = (r + 1) as u32;
        cells.push((row, 0, Cell::Text(label)));
        for (c, value) in values.iter().enumerate() {
            cells.push((row, (c + 1) as u16, Cell::Number(*value)));
        }
    }
    raw_xlsx(&cells)
}

/// Builds a table directly, with integer year columns
pub fn table(years: &[i64], rows: &[(&str, &[f64])]) -> FinancialTable {
    let mut table = FinancialTable::new(years.iter().map(|y| Label::Int(*y)).collect());
    for (label, values) in rows {
        table.push_row(
            Label::Text(label.to_string()),
            values.iter().map(|v| CellValue::Number(*v)).collect(),
        );
    }
    table
}

/// Every line item the eight ratios use, over two years
pub const FULL_STATEMENT: &[(&str, &[f64])] = &[
    ("Revenue", &[1000.0, 2000.0]),
    ("Gross Profit", &[400.0, 900.0]),
    ("SG&A", &[150.0, 300.0]),
    ("Other", &[50.0, 80.0]),
    ("EBITDA", &[200.0, 520.0]),
    ("Net Income", &[100.0, 200.0]),
    ("NOPAT", &[120.0, 250.0]),
    ("Total Assets", &[1000.0, 2000.0]),
    ("Total Shareholder Equity", &[500.0, 800.0]),
    ("Property Plant & Equipment", &[400.0, 500.0]),
    ("Invested Capital (aka Capital Employed)", &[600.0, 1000.0]),
];
