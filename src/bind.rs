// src/bind.rs
//! Scraped rows → catalog slots.
//!
//! The catalog is an arena: slot `i` belongs to the definition at position `i`,
//! so binding is a title lookup plus an indexed write, independent of the order
//! rows arrive in. A catalog of N definitions always yields N candidate rows;
//! the ones the page never mentioned keep an empty series.

use crate::catalog::{Catalog, MetricDefinition};
use crate::diagnostics::{Diagnostics, NullDiagnostics};
use crate::error::{Error, Result};
use crate::number::{NumericValue, parse_series};

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow<'c> {
    pub definition: &'c MetricDefinition,
    pub series: Vec<NumericValue>,
}

impl MetricRow<'_> {
    pub fn is_bound(&self) -> bool {
        !self.series.is_empty()
    }

    /// At least one reported (non-missing) value.
    pub fn has_data(&self) -> bool {
        self.series.iter().any(|v| !v.is_missing())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding<'c> {
    /// One row per catalog definition, in catalog order.
    pub rows: Vec<MetricRow<'c>>,
    /// Trimmed labels with no catalog entry, in scrape order.
    pub unmatched: Vec<String>,
}

impl Binding<'_> {
    pub fn bound_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_bound()).count()
    }
}

pub fn bind<'c>(catalog: &'c Catalog, rows: &[Vec<String>]) -> Result<Binding<'c>> {
    bind_with(catalog, rows, &mut NullDiagnostics)
}

/// Bind the grid body (header row already removed).
///
/// A row with no cells is a broken extractor and aborts the bind; the error's
/// `row` counts grid rows, so the first body row is 1.
pub fn bind_with<'c>(
    catalog: &'c Catalog,
    rows: &[Vec<String>],
    diag: &mut dyn Diagnostics,
) -> Result<Binding<'c>> {
    let mut slots: Vec<MetricRow<'c>> = catalog
        .iter()
        .map(|definition| MetricRow { definition, series: Vec::new() })
        .collect();
    let mut unmatched = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let Some((label, values)) = row.split_first() else {
            return Err(Error::EmptyRow { row: i + 1 });
        };
        let key = label.trim();

        match catalog.position(key) {
            Some(pos) => {
                let slot = &mut slots[pos];
                if slot.is_bound() {
                    logd!("{key:?} scraped twice; keeping the later row");
                }
                slot.series = parse_series(values, diag);
            }
            None => unmatched.push(key.to_string()),
        }
    }

    Ok(Binding { rows: slots, unmatched })
}
