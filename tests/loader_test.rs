mod common;

use common::{Cell, raw_xlsx, statement_xlsx};
use ratiosheet::error::AnalysisError;
use calamine::{Data, ExcelDateTime, ExcelDateTimeType};
use ratiosheet::loader::{excel_date, load_table};
use ratiosheet::table::{CellValue, Label};

#[test]
fn test_load_statement_layout() {
    let bytes = statement_xlsx(
        &[2021.0, 2022.0],
        &[("Net Income", &[100.0, 200.0]), ("Total Assets", &[1000.0, 2000.0])],
    );
    let table = load_table(&bytes).unwrap();

    // Year headers come back as integers, the index header is dropped
    assert_eq!(table.columns, vec![Label::Int(2021), Label::Int(2022)]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(
        table.row("Net Income"),
        Some(&[CellValue::Number(100.0), CellValue::Number(200.0)][..])
    );
    assert_eq!(
        table.row("Total Assets"),
        Some(&[CellValue::Number(1000.0), CellValue::Number(2000.0)][..])
    );
    println!("✓ Statement loaded with {} periods", table.period_count());
}

#[test]
fn test_loader_keeps_raw_labels() {
    let bytes = raw_xlsx(&[
        (0, 0, Cell::Text("Item")),
        (0, 1, Cell::Text(" FY2021 ")),
        (1, 0, Cell::Text(" Net Income ")),
        (1, 1, Cell::Number(5.0)),
    ]);
    let mut table = load_table(&bytes).unwrap();

    assert_eq!(table.columns, vec![Label::Text(" FY2021 ".to_string())]);
    assert!(table.row("Net Income").is_none());

    table.normalize_labels();
    assert_eq!(table.columns, vec![Label::Text("FY2021".to_string())]);
    assert!(table.row("Net Income").is_some());
}

#[test]
fn test_blank_header_gets_placeholder() {
    let bytes = raw_xlsx(&[
        (0, 0, Cell::Text("Item")),
        (0, 1, Cell::Number(2021.0)),
        (0, 3, Cell::Number(2023.0)),
        (1, 0, Cell::Text("Revenue")),
        (1, 1, Cell::Number(1.0)),
        (1, 2, Cell::Number(2.0)),
        (1, 3, Cell::Number(3.0)),
    ]);
    let table = load_table(&bytes).unwrap();

    assert_eq!(
        table.columns,
        vec![
            Label::Int(2021),
            Label::Text("Unnamed: 2".to_string()),
            Label::Int(2023),
        ]
    );
}

#[test]
fn test_cell_conversions() {
    let bytes = raw_xlsx(&[
        (0, 0, Cell::Text("Item")),
        (0, 1, Cell::Number(2021.0)),
        (0, 2, Cell::Number(2022.0)),
        (0, 3, Cell::Number(2022.5)),
        (1, 0, Cell::Text("Revenue")),
        (1, 1, Cell::Text(" 250 ")),
        (1, 2, Cell::Text("n/a")),
        (2, 0, Cell::Text("Other")),
        (2, 1, Cell::Number(1.5)),
    ]);
    let table = load_table(&bytes).unwrap();

    assert_eq!(table.columns[2], Label::Float(2022.5));
    assert_eq!(
        table.row("Revenue"),
        Some(
            &[
                CellValue::Number(250.0),
                CellValue::Text("n/a".to_string()),
                CellValue::Empty,
            ][..]
        )
    );
    assert_eq!(
        table.row("Other"),
        Some(&[CellValue::Number(1.5), CellValue::Empty, CellValue::Empty][..])
    );
}

#[test]
fn test_numeric_row_label() {
    let bytes = raw_xlsx(&[
        (0, 0, Cell::Text("Item")),
        (0, 1, Cell::Number(2021.0)),
        (1, 0, Cell::Number(7.0)),
        (1, 1, Cell::Number(1.0)),
    ]);
    let table = load_table(&bytes).unwrap();
    assert_eq!(table.rows[0].0, Label::Int(7));
}

#[test]
fn test_rejects_non_spreadsheet() {
    let result = load_table(b"this is just a plain text file, not a workbook");
    assert!(matches!(result, Err(AnalysisError::Workbook(_))), "got {:?}", result);

    let result = load_table(&[]);
    assert!(result.is_err());
    println!("✓ Non-spreadsheet input rejected");
}

fn serial(value: f64) -> Data {
    Data::DateTime(ExcelDateTime::new(value, ExcelDateTimeType::DateTime, false))
}

fn ymd(y: i32, m: u32, d: u32) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn test_excel_serial_dates() {
    assert_eq!(excel_date(&serial(45291.0)), ymd(2023, 12, 31));
    assert_eq!(excel_date(&serial(45291.75)), ymd(2023, 12, 31));
}

#[test]
fn test_serials_before_fictitious_leap_day() {
    // Excel counts a 1900-02-29 at serial 60
    assert_eq!(excel_date(&serial(1.0)), ymd(1900, 1, 1));
    assert_eq!(excel_date(&serial(59.0)), ymd(1900, 2, 28));
    assert_eq!(excel_date(&serial(61.0)), ymd(1900, 3, 1));
}

#[test]
fn test_iso_dates_and_plain_numbers() {
    assert_eq!(
        excel_date(&Data::DateTimeIso("2023-12-31T00:00:00".to_string())),
        ymd(2023, 12, 31)
    );
    assert_eq!(
        excel_date(&Data::DateTimeIso("2023-12-31".to_string())),
        ymd(2023, 12, 31)
    );
    assert_eq!(excel_date(&Data::Float(45291.0)), None);
    assert_eq!(excel_date(&Data::Int(2021)), None);
    assert_eq!(excel_date(&Data::String("2023".to_string())), None);
}
