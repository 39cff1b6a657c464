// src/specs/income.rs
//! Income statement page (`quote_ci_pl.php`).

use super::StatementSpec;
use crate::config::StatementKind;

pub const SPEC: StatementSpec = StatementSpec {
    kind: StatementKind::Income,
    page: "quote_ci_pl.php",
    catalog_json: include_str!("../../catalogs/income.json"),
};
