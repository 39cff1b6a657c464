// src/render.rs
//! Display rows → bordered text table.
//!
//! ```text
//! +----+------+-------+
//! |    | 2020 |  2021 |
//! +----+------+-------+
//! | G1 |      |       |
//! |----+------+-------|
//! | A  |  100 |   -50 |
//! +----+------+-------+
//! ```
//!
//! `+` corners mark the table border; `|` corners mark a section divider
//! (the org-mode hline style), so group boxes stand apart from the frame.

use std::fmt::Write;

use crate::assemble::DisplayRow;
use crate::config::RenderOptions;
use crate::number::NumericValue;

/// Column labels, verbatim from the first grid row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodHeader {
    /// Cell over the label column (usually blank on the site).
    pub label: String,
    pub periods: Vec<String>,
}

impl PeriodHeader {
    pub fn new<I, S>(periods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { label: s!(), periods: periods.into_iter().map(Into::into).collect() }
    }

    /// Split a grid's first row: label cell, then one cell per period.
    pub fn from_row(row: &[String]) -> Self {
        match row.split_first() {
            Some((label, periods)) => Self { label: label.clone(), periods: periods.to_vec() },
            None => Self::default(),
        }
    }

    /// Number of value columns.
    pub fn width(&self) -> usize {
        self.periods.len()
    }
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_value(value: &NumericValue, opts: RenderOptions) -> String {
    match *value {
        NumericValue::Missing => s!(),
        NumericValue::Integer(0) if opts.blank_zero => s!(),
        NumericValue::Integer(n) => group_thousands(n),
        NumericValue::Real(f) => format!("{f:.3}"),
    }
}

enum Line {
    Cells(Vec<String>),
    Divider,
}

pub fn render(header: &PeriodHeader, rows: &[DisplayRow<'_>]) -> String {
    render_with(header, rows, RenderOptions::default())
}

pub fn render_with(header: &PeriodHeader, rows: &[DisplayRow<'_>], opts: RenderOptions) -> String {
    let values = rows
        .iter()
        .filter_map(|r| match r {
            DisplayRow::Data(m) => Some(m.series.len()),
            _ => None,
        })
        .max()
        .unwrap_or(0)
        .max(header.width());
    let ncols = values + 1;

    let head = padded(
        std::iter::once(header.label.clone()).chain(header.periods.iter().cloned()),
        ncols,
    );

    let body: Vec<Line> = rows
        .iter()
        .map(|row| match row {
            DisplayRow::Data(m) => Line::Cells(padded(
                std::iter::once(m.definition.title.clone())
                    .chain(m.series.iter().map(|v| format_value(v, opts))),
                ncols,
            )),
            DisplayRow::GroupHeader(group) => Line::Cells(padded([group.to_string()], ncols)),
            DisplayRow::Separator => Line::Divider,
        })
        .collect();

    let mut widths = vec![0usize; ncols];
    for cells in std::iter::once(&head).chain(body.iter().filter_map(|l| match l {
        Line::Cells(c) => Some(c),
        Line::Divider => None,
    })) {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let border = rule(&widths, '+');
    let mut out = String::new();
    out.push_str(&border);
    push_cells(&mut out, &head, &widths);
    out.push_str(&border);
    for line in &body {
        match line {
            Line::Cells(cells) => push_cells(&mut out, cells, &widths),
            Line::Divider => out.push_str(&rule(&widths, '|')),
        }
    }
    out.push_str(&border);
    out
}

/// Collect cells, padding with blanks up to `ncols`.
fn padded<I: IntoIterator<Item = String>>(cells: I, ncols: usize) -> Vec<String> {
    let mut v: Vec<String> = cells.into_iter().collect();
    if v.len() < ncols {
        v.resize(ncols, s!());
    }
    v
}

/// `+----+------+` (border) or `|----+------|` (divider).
fn rule(widths: &[usize], edge: char) -> String {
    let inner: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("{edge}{}{edge}\n", inner.join("+"))
}

fn push_cells(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (col, (cell, &w)) in cells.iter().zip(widths).enumerate() {
        // label column reads left-to-right; numbers line up on the right
        let _ = if col == 0 {
            write!(out, " {cell:<w$} |")
        } else {
            write!(out, " {cell:>w$} |")
        };
    }
    out.push('\n');
}
