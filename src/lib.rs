// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod number;
pub mod catalog;
pub mod bind;
pub mod assemble;
pub mod render;
pub mod pipeline;
pub mod diagnostics;

pub mod csv;
pub mod file;
pub mod runner;
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use pipeline::Report;
