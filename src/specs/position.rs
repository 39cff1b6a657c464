// src/specs/position.rs
//! Financial position (balance sheet) page (`quote_ci_bs.php`).

use super::StatementSpec;
use crate::config::StatementKind;

pub const SPEC: StatementSpec = StatementSpec {
    kind: StatementKind::Position,
    page: "quote_ci_bs.php",
    catalog_json: include_str!("../../catalogs/position.json"),
};
