//! Document I/O

use crate::error::{Result, TagStripError};
use crate::infrastructure::Config;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read the full text of a document.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| TagStripError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite the document at `path` in place.
///
/// The existing file is truncated and rewritten through the path, so symlinks
/// are followed and the file keeps its permissions.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    let write_err = |source| TagStripError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    Ok(())
}

/// Expand command-line arguments into the files to process, in order.
///
/// Files are taken as given. Directories are walked recursively and only
/// files with a configured extension are kept.
pub fn collect_targets(args: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let mut targets = Vec::new();

    for arg in args {
        if !arg.is_dir() {
            targets.push(arg.clone());
            continue;
        }

        for entry in WalkDir::new(arg).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if config.matches_extension(entry.path()) {
                targets.push(entry.into_path());
            } else {
                tracing::trace!(path = %entry.path().display(), "skipping non-matching file");
            }
        }
    }

    Ok(targets)
}
