use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use matdoc::{create_out_dir, file_map, find_mfiles, metadata_path, parse_source};

/// Extract documentation metadata from MATLAB source files.
///
/// Writes one JSON record per `.m` file into the output directory, plus
/// a `file_map.json` index of files per directory.
#[derive(Parser, Debug)]
#[command(name = "matdoc", version, about)]
struct Cli {
    /// Files or directories to document
    #[arg(long = "m-files", default_value = ".", num_args = 1..)]
    m_files: Vec<PathBuf>,

    /// Destination directory for the generated metadata
    #[arg(long, default_value = "doc")]
    out_dir: PathBuf,

    /// Recurse into subdirectories
    #[arg(long)]
    recursive: bool,

    /// Directory names to skip while scanning
    #[arg(long = "ignore-dir", default_values_t = matdoc::DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()))]
    ignore_dirs: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mfiles = find_mfiles(&cli.m_files, cli.recursive, &cli.ignore_dirs)
        .context("file discovery failed")?;
    println!("Found {} MATLAB files", mfiles.len());

    create_out_dir(&cli.out_dir)?;

    let mut written = 0usize;
    let mut skipped = 0usize;
    for path in &mfiles {
        // A file that cannot be read is a warning for that file, never a
        // fatal error for the run.
        let source = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("warning: skipping {}: {}", path.display(), err);
                skipped += 1;
                continue;
            }
        };

        let parsed = parse_source(&source);
        // Mirror the source's directory under out_dir so same-stem files
        // from different directories keep distinct records.
        let out_path = metadata_path(&cli.out_dir, path);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&parsed)
            .with_context(|| format!("failed to serialize metadata for {}", path.display()))?;
        fs::write(&out_path, json)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        written += 1;
    }

    let map = file_map(&mfiles);
    let map_json = serde_json::to_string_pretty(&map).context("failed to serialize file map")?;
    fs::write(cli.out_dir.join("file_map.json"), map_json)
        .context("failed to write file map")?;

    println!(
        "Wrote metadata for {} files ({} skipped) to {}",
        written,
        skipped,
        cli.out_dir.display()
    );
    Ok(())
}
