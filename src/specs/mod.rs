// src/specs/mod.rs
//! # Statement “specs” module
//!
//! One spec per statement page on the site. A spec pins down the two things
//! that are coupled to the upstream source and nothing else:
//!
//! - **where the page lives** (`page`, joined onto `config::consts::BASE_URL`
//!   with `?code=<company>`), and
//! - **which metric catalog binds its rows** (`catalog_json`, embedded from
//!   `catalogs/<kind>.json` at compile time).
//!
//! ## What does **not** live here
//! - HTML walking (`core::html`), number parsing (`number`), binding and
//!   layout (`bind`, `assemble`, `render`). Specs are data.
//!
//! ## Conventions & invariants
//! - Catalog titles are the page's **literal** row labels, punctuation and all
//!   (`"ROAA (%)"`, `"Total Liabilities / Total Assets(%)"`). If the site changes
//!   its wording, rows stop binding and show up in the unmatched-titles warning;
//!   fix the JSON, not the code.
//! - Catalog order is display order. Group names are display-only.
//!
//! ## Testing notes
//! - Every built-in catalog must load (no duplicate or blank titles); see the
//!   tests below.
pub mod ratio;
pub mod income;
pub mod position;

use crate::config::StatementKind;
use crate::config::consts::BASE_URL;

pub struct StatementSpec {
    pub kind: StatementKind,
    pub page: &'static str,
    pub catalog_json: &'static str,
}

pub fn spec(kind: StatementKind) -> &'static StatementSpec {
    match kind {
        StatementKind::Ratio => &ratio::SPEC,
        StatementKind::Income => &income::SPEC,
        StatementKind::Position => &position::SPEC,
    }
}

/// Page URL for one company's statement.
pub fn statement_url(kind: StatementKind, code: u32) -> String {
    format!("{BASE_URL}{}?code={code}", spec(kind).page)
}
