mod error;


pub use error::DiscoveryError;

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Directory names skipped during discovery by default.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[".svn", "cvs", ".git"];

/// Resolve input paths to the list of `.m` files to document.
///
/// A path naming a file passes through as-is; a directory is scanned for
/// `.m` files, recursing when `recursive` is set and pruning directories
/// whose name appears in `ignore_dirs`. Anything else is an error.
/// Duplicates are dropped, first occurrence wins.
pub fn find_mfiles(
    paths: &[PathBuf],
    recursive: bool,
    ignore_dirs: &[String],
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_file() {
            found.push(path.clone());
        } else if path.is_dir() {
            found.extend(mfiles_in_dir(path, recursive, ignore_dirs)?);
        } else {
            return Err(DiscoveryError::NotFileOrDirectory(path.clone()));
        }
    }

    let mut seen = HashSet::new();
    found.retain(|path| seen.insert(path.clone()));
    Ok(found)
}

/// Collect `.m` files under one directory in a stable name order.
fn mfiles_in_dir(
    dir: &Path,
    recursive: bool,
    ignore_dirs: &[String],
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut walker = WalkDir::new(dir).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry, ignore_dirs))
    {
        let entry = entry?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == "m") {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_ignored_dir(entry: &walkdir::DirEntry, ignore_dirs: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignore_dirs.iter().any(|ignored| ignored == name))
}

/// Group file paths by their parent directory.
///
/// Returns a map from directory path to the file names found there,
/// consumed by aggregate tooling such as per-directory indexes. Names
/// within one directory are sorted.
pub fn file_map(paths: &[PathBuf]) -> BTreeMap<PathBuf, Vec<String>> {
    let mut map: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();
    for path in paths {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let dir = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        map.entry(dir).or_default().push(name.to_string());
    }
    for names in map.values_mut() {
        names.sort();
    }
    map
}
