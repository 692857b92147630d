use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutDirError {
    #[error("destination documentation directory exists as a non-directory file: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to create documentation directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Create the documentation output directory.
///
/// Succeeds when the directory already exists; fails when the path
/// exists but is not a directory.
pub fn create_out_dir(path: &Path) -> Result<(), OutDirError> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(OutDirError::NotADirectory(path.to_path_buf()));
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Compute the metadata file path for one source file, mirroring the
/// source's directory structure under the output directory.
///
/// Root, prefix and parent-dir components are dropped so the result
/// always stays inside `out_dir`; files sharing a stem in different
/// directories map to distinct paths instead of overwriting each other.
pub fn metadata_path(out_dir: &Path, source: &Path) -> PathBuf {
    let mut path = out_dir.to_path_buf();
    if let Some(parent) = source.parent() {
        for component in parent.components() {
            if let Component::Normal(part) = component {
                path.push(part);
            }
        }
    }
    let stem = source.file_stem().unwrap_or_else(|| OsStr::new("unnamed"));
    path.push(format!("{}.json", stem.to_string_lossy()));
    path
}
