// src/runner.rs
use std::path::PathBuf;

use crate::{
    catalog::Catalog,
    config::{RunOptions, Source},
    core::html,
    csv,
    diagnostics::Diagnostics,
    error::{Error, Result},
    file,
    pipeline::{self, Report},
};

/// What a run produced.
pub struct RunSummary {
    pub report: Report,
    /// `None` when the table went to stdout.
    pub written: Option<PathBuf>,
}

/// Catalog for this run: the override file if given, else the built-in one.
pub fn load_catalog(opts: &RunOptions) -> Result<Catalog> {
    match &opts.catalog {
        Some(path) => {
            logf!("Catalog: {}", path.display());
            Catalog::from_path(path)
        }
        None => Catalog::for_statement(opts.kind),
    }
}

/// Get the raw grid from wherever `opts.source` points.
pub fn load_grid(opts: &RunOptions) -> Result<Vec<Vec<String>>> {
    match &opts.source {
        Source::Fetch => fetch_grid(opts),
        Source::Html(path) => {
            let doc = std::fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
            html::extract_grid(&doc)
        }
        Source::Grid(path) => csv::read_grid(path),
    }
}

#[cfg(feature = "net")]
fn fetch_grid(opts: &RunOptions) -> Result<Vec<Vec<String>>> {
    let url = crate::specs::statement_url(opts.kind, opts.code);
    let doc = crate::core::net::http_get(&url)?;
    html::extract_grid(&doc)
}

#[cfg(not(feature = "net"))]
fn fetch_grid(opts: &RunOptions) -> Result<Vec<Vec<String>>> {
    Err(Error::Fetch {
        url: crate::specs::statement_url(opts.kind, opts.code),
        reason: s!("built without the `net` feature"),
    })
}

/// Top-level runner: load catalog and grid, build the report, write it out.
/// With no `out` path the caller prints `summary.report.table`.
pub fn run(opts: &RunOptions, diag: &mut dyn Diagnostics) -> Result<RunSummary> {
    let catalog = load_catalog(opts)?;
    let grid = load_grid(opts)?;
    let report = pipeline::run(&catalog, &grid, opts.render, diag)?;
    logf!(
        "{} {}: {} metric row(s), {} period(s)",
        opts.kind.title(),
        opts.code,
        report.metrics,
        report.header.width()
    );

    let written = match &opts.out {
        Some(path) => {
            let name = file::default_report_name(opts.code, opts.kind.key());
            Some(file::write_report(path, &name, &report.table)?)
        }
        None => None,
    };

    Ok(RunSummary { report, written })
}
