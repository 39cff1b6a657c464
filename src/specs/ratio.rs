// src/specs/ratio.rs
//! Financial ratios page (`quote_ci_ratio.php`).
//!
//! Bank-specific rows (NIM, capital ratios, loan/deposit ratios) and the general
//! margin/leverage rows share one page; a company only ever reports a subset.

use super::StatementSpec;
use crate::config::StatementKind;

pub const SPEC: StatementSpec = StatementSpec {
    kind: StatementKind::Ratio,
    page: "quote_ci_ratio.php",
    catalog_json: include_str!("../../catalogs/ratio.json"),
};
