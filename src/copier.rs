//! Directory tree copying for Stencil.
//! Copies a template tree into a destination while excluding
//! version-control metadata and tooling caches. The copy is all-or-nothing:
//! a failure removes the partial destination before the error propagates.

use crate::constants::EXCLUDED_ENTRIES;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Whether a directory entry name is excluded from copying.
///
/// The exclusion set is fixed and independent of user configuration.
pub fn is_excluded(name: &OsStr) -> bool {
    EXCLUDED_ENTRIES.iter().any(|entry| name == *entry)
}

/// Copies `source` into `dest`, which must not exist yet.
///
/// # Errors
/// * `Error::DestinationExists` if `dest` is already present; it is left
///   untouched
/// * `Error::IoError` on any copy failure; the partially written
///   destination is removed first
pub fn copy_tree(source: &Path, dest: &Path) -> Result<()> {
    if dest.exists() {
        return Err(Error::DestinationExists(dest.to_path_buf()));
    }

    debug!("Copying '{}' to '{}'.", source.display(), dest.display());

    match copy_entries(source, dest) {
        Ok(()) => Ok(()),
        Err(e) => {
            if dest.exists() {
                if let Err(cleanup) = fs::remove_dir_all(dest) {
                    warn!(
                        "Could not remove partial destination '{}': {}",
                        dest.display(),
                        cleanup
                    );
                }
            }
            Err(e)
        }
    }
}

fn copy_entries(source: &Path, dest: &Path) -> Result<()> {
    let walker = WalkDir::new(source)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e.file_name()));

    for entry in walker {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::Config(e.to_string()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(Error::IoError)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(Error::IoError)?;
            }
            fs::copy(entry.path(), &target).map(|_| ()).map_err(Error::IoError)?;
        }
    }
    Ok(())
}
