//! Output writing for rendered templates.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Ensures the output directory at `path` exists. An already existing
/// directory is not an error; it is logged and left alone.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if path.exists() {
        debug!("Output directory already exists: {}", path.display());
        return Ok(());
    }
    fs::create_dir_all(path).map_err(Error::IoError)
}

/// Writes rendered template text to `output_dir/filename`, truncating any
/// prior content.
pub fn write_rendered(output_dir: &Path, filename: &str, content: &str) -> Result<()> {
    let dest = output_dir.join(filename);
    debug!("Writing rendered template to {}", dest.display());
    fs::write(dest, content).map_err(Error::IoError)
}
