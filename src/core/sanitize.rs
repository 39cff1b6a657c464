// src/core/sanitize.rs

/// Collapse whitespace runs (incl. `&nbsp;` once decoded) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Normalize a whole grid in place; used on grids that did not come from
/// `core::html` (CSV/TSV files), so the binder sees the same cell shape.
pub fn normalize_grid(grid: &mut [Vec<String>]) {
    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            *cell = normalize_ws(cell);
        }
    }
}

/// Drop rows whose cells are all blank (trailing lines, spacer rows).
pub fn drop_blank_rows(grid: &mut Vec<Vec<String>>) {
    grid.retain(|row| row.iter().any(|c| !c.trim().is_empty()));
}
