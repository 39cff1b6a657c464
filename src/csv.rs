// src/csv.rs
//! Raw grids stored as CSV/TSV, for offline runs and fixtures.
//!
//! Same shape the HTML extractor produces: no header record, ragged rows
//! allowed, first row holds the period labels.

use std::path::Path;

use ::csv::ReaderBuilder;

use crate::core::sanitize::{drop_blank_rows, normalize_grid};
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    /// `.tsv`/`.tab` → Tsv, anything else → Csv.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase) {
            Some(ext) if ext == "tsv" || ext == "tab" => Delim::Tsv,
            _ => Delim::Csv,
        }
    }

    pub fn byte(&self) -> u8 {
        match self {
            Delim::Csv => b',',
            Delim::Tsv => b'\t',
        }
    }
}

pub fn parse_grid(text: &str, delim: Delim) -> Result<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delim.byte())
        .from_reader(text.as_bytes());

    let mut grid = Vec::new();
    for record in rdr.records() {
        let record = record?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    normalize_grid(&mut grid);
    drop_blank_rows(&mut grid);
    Ok(grid)
}

pub fn read_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
    parse_grid(&text, Delim::from_path(path))
}
