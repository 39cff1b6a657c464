// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// Write the rendered table to `path`, creating parent directories.
/// A path that ends in a separator or names a directory gets `default_name` appended.
/// Returns the final path written to.
pub fn write_report(path: &Path, default_name: &str, text: &str) -> Result<PathBuf> {
    let path = if looks_like_dir_hint(path) || path.is_dir() {
        ensure_directory(path)?;
        path.join(default_name)
    } else {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        path.to_path_buf()
    };

    fs::write(&path, text).map_err(|e| Error::file(&path, e))?;
    Ok(path)
}

/// Write the table to any sink (stdout in the CLI).
pub fn write_to<W: Write>(mut w: W, text: &str) -> Result<()> {
    w.write_all(text.as_bytes())?;
    w.flush()?;
    Ok(())
}

/// `"316_ratio.txt"`
pub fn default_report_name(code: u32, kind_key: &str) -> String {
    format!("{code}_{kind_key}.txt")
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::file(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::file(dir, e))?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
