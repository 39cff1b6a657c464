// src/config/mod.rs
pub mod consts;
pub mod options;

pub use options::{RenderOptions, RunOptions, Source, StatementKind};
