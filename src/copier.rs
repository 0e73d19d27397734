//! Verbatim asset copying from the content root into the output tree.
//! A copy source may be a single file or a whole directory; directories
//! are copied recursively.

use crate::content::ContentStore;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Copies `name` (a path relative to the content root) into `output_dir`.
/// The destination keeps the source's final path component, so
/// `images/logo.png` lands at `output_dir/logo.png`.
///
/// # Errors
/// * `Error::CopySourceError` if the source is neither a file nor a directory
/// * `Error::IoError` on any filesystem failure during the copy
pub fn copy_entry(store: &ContentStore, name: &str, output_dir: &Path) -> Result<()> {
    let source = store.root().join(name);
    let file_name = source.file_name().ok_or_else(|| Error::EntryNameError {
        name: name.to_string(),
        reason: "copy path has no final component".to_string(),
    })?;
    let dest = output_dir.join(file_name);

    if source.is_file() {
        debug!("Copying file {} -> {}", source.display(), dest.display());
        fs::copy(&source, &dest).map(|_| ()).map_err(Error::IoError)
    } else if source.is_dir() {
        debug!("Copying tree {} -> {}", source.display(), dest.display());
        copy_tree(&source, &dest)
    } else {
        Err(Error::CopySourceError {
            path: source.display().to_string(),
        })
    }
}

/// Recursively copies the directory at `source` to `dest`.
fn copy_tree(source: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .expect("walkdir yields paths under its root");
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(Error::IoError)?;
        } else {
            fs::copy(entry.path(), &target).map(|_| ()).map_err(Error::IoError)?;
        }
    }
    Ok(())
}
