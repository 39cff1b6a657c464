// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::consts::BLANK_ZERO;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Ratio,
    Income,
    Position,
}

impl StatementKind {
    pub const ALL: [StatementKind; 3] = [
        StatementKind::Ratio,
        StatementKind::Income,
        StatementKind::Position,
    ];

    /// Short name used on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            StatementKind::Ratio => "ratio",
            StatementKind::Income => "income",
            StatementKind::Position => "position",
        }
    }

    /// Human-readable name for display
    pub fn title(&self) -> &'static str {
        match self {
            StatementKind::Ratio => "Financial Ratios",
            StatementKind::Income => "Income Statement",
            StatementKind::Position => "Financial Position",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StatementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ratio" | "ratios" | "financial-ratio" => Ok(StatementKind::Ratio),
            "income" | "pl" | "income-statement" => Ok(StatementKind::Income),
            "position" | "bs" | "balance-sheet" | "financial-position" => {
                Ok(StatementKind::Position)
            }
            other => Err(format!(
                "Unknown statement kind: {other} (expected ratio, income or position)"
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print `Integer(0)` as a blank cell, same as a missing value.
    pub blank_zero: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { blank_zero: BLANK_ZERO }
    }
}

/// Where the raw grid comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Fetch the statement page for the company code.
    Fetch,
    /// A saved statement page.
    Html(PathBuf),
    /// A CSV/TSV file holding the raw grid.
    Grid(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub kind: StatementKind,
    pub code: u32,
    pub source: Source,
    pub catalog: Option<PathBuf>,     // override the built-in catalog
    pub out: Option<PathBuf>,         // None → stdout
    pub render: RenderOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            kind: StatementKind::Ratio,
            code: 0,
            source: Source::Fetch,
            catalog: None,
            out: None,
            render: RenderOptions::default(),
        }
    }
}
