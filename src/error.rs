// src/error.rs
//! Crate-wide error type.
//!
//! Two families are fatal by contract:
//! - **structural**: the extracted grid (or the page it came from) is not shaped
//!   like a statement table, so nothing can be rendered;
//! - **config**: a metric catalog is unusable (duplicate/blank titles, bad JSON).
//!
//! Binding misses and unparseable numbers are *not* errors; they flow through
//! `Binding::unmatched` and the `Diagnostics` sink instead.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("raw grid has no header row")]
    MissingHeader,

    #[error("raw grid row {row} has no cells")]
    EmptyRow { row: usize },

    #[error("no statement table found in document")]
    NoTable,

    #[error("duplicate catalog title {title:?} at positions {first} and {second}")]
    DuplicateTitle { title: String, first: usize, second: usize },

    #[error("blank catalog title at position {position}")]
    BlankTitle { position: usize },

    #[error("malformed catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed grid file: {0}")]
    Grid(#[from] ::csv::Error),

    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The scraper's output contract was violated.
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::MissingHeader | Error::EmptyRow { .. } | Error::NoTable)
    }

    /// A catalog could not be built.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::DuplicateTitle { .. } | Error::BlankTitle { .. } | Error::CatalogFormat(_)
        )
    }

    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::File { path: path.into(), source }
    }
}
