// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::catalog::Catalog;
use crate::config::{RenderOptions, RunOptions, Source, StatementKind};
use crate::diagnostics::LogDiagnostics;
use crate::error::Result;
use crate::{file, runner};

/// Scrape a company's financial statement and print it as a grouped table.
#[derive(Debug, Parser)]
#[command(name = "fin_statement", version)]
pub struct Args {
    /// Statement page: ratio, income or position
    #[arg(short, long, default_value = "ratio")]
    pub kind: StatementKind,

    /// Company (stock) code
    #[arg(short, long, required_unless_present_any = ["html", "grid", "list"])]
    pub code: Option<u32>,

    /// Read a saved statement page instead of fetching
    #[arg(long, value_name = "FILE", conflicts_with = "grid")]
    pub html: Option<PathBuf>,

    /// Read the raw grid from a CSV/TSV file instead of fetching
    #[arg(long, value_name = "FILE")]
    pub grid: Option<PathBuf>,

    /// Metric catalog (JSON) to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Write the table here instead of stdout (a directory gets <code>_<kind>.txt)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Print integer zeros instead of leaving them blank
    #[arg(long)]
    pub show_zero: bool,

    /// List the catalog rows and exit
    #[arg(long)]
    pub list: bool,

    /// More logging (-v info, -vv debug); FIN_STATEMENT_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_options(&self) -> RunOptions {
        let source = match (&self.html, &self.grid) {
            (Some(p), _) => Source::Html(p.clone()),
            (None, Some(p)) => Source::Grid(p.clone()),
            (None, None) => Source::Fetch,
        };
        RunOptions {
            kind: self.kind,
            code: self.code.unwrap_or(0),
            source,
            catalog: self.catalog.clone(),
            out: self.out.clone(),
            render: RenderOptions { blank_zero: !self.show_zero },
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    crate::log::init(args.verbose);
    let opts = args.to_options();

    if args.list {
        let catalog = runner::load_catalog(&opts)?;
        return file::write_to(io::stdout().lock(), &list_catalog(&catalog));
    }

    let summary = runner::run(&opts, &mut LogDiagnostics)?;
    match summary.written {
        Some(path) => {
            let mut err = io::stderr().lock();
            let _ = writeln!(err, "Wrote {}", path.display());
        }
        None => file::write_to(io::stdout().lock(), &summary.report.table)?,
    }
    Ok(())
}

/// Catalog rows grouped under their section names, with positions.
pub fn list_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let mut prev: Option<&str> = None;
    for def in catalog {
        if prev != Some(def.group.as_str()) {
            out.push_str(&format!("[{}]\n", def.group));
            prev = Some(def.group.as_str());
        }
        out.push_str(&format!("{:>4}  {}\n", def.position, def.title));
    }
    out
}
