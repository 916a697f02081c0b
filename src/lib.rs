/*!
# Ratio Sheet

A small web service that turns an uploaded financial statement workbook into
a set of standard ratios, one chart per ratio, and an HTML results page.

## Overview

A user uploads a single spreadsheet whose first column holds line-item names
("Net Income", "Revenue", ...) and whose header row holds periods (usually
fiscal years). The service looks up pairs of line items by exact name,
divides them period by period, and reports each quotient as a percentage.

## Flow

1. **loader**: reads the first worksheet with calamine into a `FinancialTable`
2. **table**: trims whitespace around text labels; numeric labels are untouched
3. **ratios**: computes the eight fixed ratios, or records them as missing
4. **graph**: draws one PNG line chart per computed ratio with plotters
5. **report**: renders the results page with handlebars
6. **app**: axum routes for the upload form, the upload itself, and `/results`

## Ratios

| Ratio | Numerator | Denominator |
|-------|-----------|-------------|
| Return on Equity | Net Income | Total Shareholder Equity |
| Return on Assets | Net Income | Total Assets |
| Return on Net Assets | Net Income | Property Plant & Equipment |
| Return on Invested Capital | NOPAT | Invested Capital (aka Capital Employed) |
| Gross Margin | Gross Profit | Revenue |
| SG&A % of Revenue | SG&A | Revenue |
| Other Operating Expenses % of Revenue | Other | Revenue |
| EBITDA Margin | EBITDA | Revenue |

## REST Endpoints

- `GET /` - Upload form
- `POST /` - Multipart upload (field `file`); returns the results page or a plain text error
- `GET /results` - Empty results page
- `GET /static/charts/{file}` - Rendered chart images
*/

pub mod analysis;
pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod ratios;
pub mod report;
pub mod table;

#[cfg(feature = "web")]
pub mod app;

pub use analysis::*;
pub use config::*;
pub use error::*;
pub use ratios::*;
pub use table::*;
