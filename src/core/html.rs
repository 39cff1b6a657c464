// src/core/html.rs
//! Statement page → raw grid.
//!
//! The figures live in `<table class="figureTable">` blocks: the first one
//! carries the period header row, the rest carry metric rows. Every `<td>` of
//! every `<tr>` becomes a cell; cell text is whitespace-collapsed so row labels
//! match catalog titles verbatim.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;
use crate::config::consts::{MAX_TABLES, TABLE_SELECTOR};
use crate::error::{Error, Result};

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(TABLE_SELECTOR).expect("valid table selector"));
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid tr selector"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid td selector"));

/// Extract the grid: row 0 is the period header, the rest `[label, values…]`.
/// Rows without `<td>` cells (pure `<th>` banners) are skipped.
pub fn extract_grid(doc: &str) -> Result<Vec<Vec<String>>> {
    let html = Html::parse_document(doc);

    let mut tables = 0usize;
    let mut grid = Vec::new();
    for table in html.select(&TABLE).take(MAX_TABLES) {
        tables += 1;
        for tr in table.select(&ROW) {
            let row: Vec<String> = tr.select(&CELL).map(cell_text).collect();
            if !row.is_empty() {
                grid.push(row);
            }
        }
    }

    if tables == 0 {
        return Err(Error::NoTable);
    }
    logd!("extracted {} rows from {tables} figure table(s)", grid.len());
    Ok(grid)
}

fn cell_text(td: ElementRef<'_>) -> String {
    normalize_ws(&td.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <table class="figureTable">
            <tr><td>&nbsp;</td><td>2019/12</td><td>2020/12</td></tr>
          </table>
          <table class="figureTable">
            <tr><th colspan="3">Profitability Analysis</th></tr>
            <tr><td>ROAA  (%)</td><td>1.234</td><td><span>(0.5)</span></td></tr>
            <tr>
              <td>
                ROAE (%)
              </td>
              <td>N/A</td><td>12,345</td>
            </tr>
          </table>
          <table class="other"><tr><td>ignored</td></tr></table>
        </body></html>
    "#;

    #[test]
    fn extracts_header_and_rows() {
        let grid = extract_grid(PAGE).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], cells!["", "2019/12", "2020/12"]);
        assert_eq!(grid[1], cells!["ROAA (%)", "1.234", "(0.5)"]);
        assert_eq!(grid[2], cells!["ROAE (%)", "N/A", "12,345"]);
    }

    #[test]
    fn page_without_figure_table() {
        let err = extract_grid("<html><body><p>Quote not found</p></body></html>").unwrap_err();
        assert!(matches!(err, Error::NoTable));
        assert!(err.is_structural());
    }

    #[test]
    fn stops_after_table_limit() {
        let mut doc = s!("<html><body>");
        for i in 0..(MAX_TABLES + 3) {
            doc.push_str(&format!(r#"<table class="figureTable"><tr><td>row {i}</td></tr></table>"#));
        }
        doc.push_str("</body></html>");
        let grid = extract_grid(&doc).unwrap();
        assert_eq!(grid.len(), MAX_TABLES);
        assert_eq!(grid.last().unwrap()[0], format!("row {}", MAX_TABLES - 1));
    }
}
