//! File I/O for the config file, every failure mapped to `Error::internal_io`.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

fn io_error(err: std::io::Error, operation: String) -> Error {
    Error::internal_io(err.to_string(), Some(operation))
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| io_error(e, format!("read {}", path.display())))
}

/// Create the parent directory of `path` when it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| io_error(e, format!("create {}", parent.display()))),
        _ => Ok(()),
    }
}

/// Write through a sibling `.tmp` file and rename it into place, so readers
/// see either the old content or the new content.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let filename = path.file_name().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some("write".to_string()),
        )
    })?;
    let tmp_path = path.with_file_name(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content)
        .map_err(|e| io_error(e, format!("write {}", tmp_path.display())))?;
    fs::rename(&tmp_path, path).map_err(|e| io_error(e, format!("rename to {}", path.display())))
}

/// Remove `path`. `Ok(false)` when it did not exist.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| io_error(e, format!("delete {}", path.display())))?;
    Ok(true)
}
