// src/number.rs
//! Cell text → typed number.
//!
//! Handles the formats the statement pages actually use: thousands commas,
//! accounting negatives `(1,234)`, percentages `12.500%` and the `N/A` sentinel.
//! Anything else that fails to parse degrades to [`NumericValue::Missing`];
//! a malformed cell never aborts a run.

use crate::diagnostics::{Diagnostics, NullDiagnostics};

/// Cell text the site uses for "not applicable".
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NumericValue {
    Integer(i64),
    Real(f64),
    #[default]
    Missing,
}

impl NumericValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, NumericValue::Missing)
    }
}

/// Parse one cell, dropping fallback diagnostics.
pub fn parse(raw: &str) -> NumericValue {
    parse_with(raw, &mut NullDiagnostics)
}

/// Parse one cell; unparseable text is reported to `diag` before becoming `Missing`.
pub fn parse_with(raw: &str, diag: &mut dyn Diagnostics) -> NumericValue {
    let mut s: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    if s.is_empty() || s == NOT_AVAILABLE {
        return NumericValue::Missing;
    }

    let is_percentage = s.contains('%');
    if is_percentage {
        s.retain(|c| c != '%');
    }

    if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        s = format!("-{inner}");
    }

    if !is_percentage {
        if let Ok(i) = s.parse::<i64>() {
            return NumericValue::Integer(i);
        }
    }

    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => {
            NumericValue::Real(if is_percentage { f / 100.0 } else { f })
        }
        _ => {
            logd!("parse fallback: {raw:?}");
            diag.parse_fallback(raw);
            NumericValue::Missing
        }
    }
}

/// Parse a row's value cells in order.
pub fn parse_series<S: AsRef<str>>(cells: &[S], diag: &mut dyn Diagnostics) -> Vec<NumericValue> {
    cells.iter().map(|c| parse_with(c.as_ref(), diag)).collect()
}
