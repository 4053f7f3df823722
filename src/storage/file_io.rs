//! File I/O utilities with atomic writes
//!
//! Dumps and exports are written to a temporary sibling file and renamed
//! into place, so an interrupted write never leaves a half-written file at
//! the target path.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{BeerusError, BeerusResult};

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a file atomically (write to temp, then rename)
///
/// `write` receives a buffered writer on the temp file; its result is
/// returned once the file is synced and renamed.
pub fn write_atomic<P, T, F>(path: P, write: F) -> BeerusResult<T>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> BeerusResult<T>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                BeerusError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let temp_path = temp_path_for(path);
    let file = File::create(&temp_path)
        .map_err(|e| BeerusError::Io(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    let result = write(&mut writer).and_then(|value| {
        writer
            .flush()
            .map_err(|e| BeerusError::Io(format!("Failed to flush data: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| BeerusError::Io(format!("Failed to sync data: {}", e)))?;
        Ok(value)
    });

    let value = match result {
        Ok(value) => value,
        Err(e) => {
            drop(writer);
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
    };
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BeerusError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(value)
}
