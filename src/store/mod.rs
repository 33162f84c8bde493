//! Result export
//!
//! Flat CSV and structured JSON writers for a [`ResultSet`](crate::models::ResultSet),
//! plus a JSON reader. Writers overwrite existing files and create missing
//! parent directories.

mod csv;
mod json;

use std::fs;
use std::path::Path;

use crate::error::AppResult;

pub use csv::{render_csv, save_csv};
pub use json::{load_json, parse_json, render_json, save_json};

/// Write `contents` to `path`, replacing any existing file
fn write_file(path: &Path, contents: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote results");
    Ok(())
}
