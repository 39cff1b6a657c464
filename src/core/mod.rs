// src/core/mod.rs

pub mod html;
#[cfg(feature = "net")]
pub mod net;
pub mod sanitize;
