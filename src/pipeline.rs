// src/pipeline.rs
//! Raw grid → report, the whole core in one call.
//!
//! ```text
//! grid[0]   → PeriodHeader ─────────────────────────────┐
//! grid[1..] → bind → Binding.rows → assemble → render ──┴→ Report.table
//!                  ↘ Binding.unmatched → Diagnostics::unmatched (once)
//! ```
//!
//! Nothing here is shared between calls; independent statements can run on
//! separate threads, each with its own catalog.

use crate::bind::bind_with;
use crate::catalog::Catalog;
use crate::config::RenderOptions;
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::render::{PeriodHeader, render_with};
use crate::assemble::{DisplayRow, assemble};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub header: PeriodHeader,
    /// Rendered table, newline-terminated.
    pub table: String,
    /// Scraped labels the catalog does not know.
    pub unmatched: Vec<String>,
    /// Metric rows that made it into the table.
    pub metrics: usize,
}

pub fn run(
    catalog: &Catalog,
    grid: &[Vec<String>],
    opts: RenderOptions,
    diag: &mut dyn Diagnostics,
) -> Result<Report> {
    let (head, body) = grid.split_first().ok_or(Error::MissingHeader)?;
    if head.is_empty() {
        return Err(Error::EmptyRow { row: 0 });
    }
    let header = PeriodHeader::from_row(head);

    let binding = bind_with(catalog, body, diag)?;
    if !binding.unmatched.is_empty() {
        diag.unmatched(&binding.unmatched);
    }
    logd!(
        "bound {}/{} catalog rows, {} unmatched",
        binding.bound_count(),
        catalog.len(),
        binding.unmatched.len()
    );

    let unmatched = binding.unmatched;
    let rows = assemble(binding.rows);
    let metrics = rows.iter().filter(|r| matches!(r, DisplayRow::Data(_))).count();
    let table = render_with(&header, &rows, opts);

    Ok(Report { header, table, unmatched, metrics })
}
