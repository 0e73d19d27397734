//! Command-line interface implementation for chisel.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for chisel.
///
/// Every option has a default, so a bare `chisel` invocation performs one
/// full traversal-and-render pass of the site tree.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "chisel: data-bound static site generator", long_about = None)]
pub struct Args {
    /// Directory holding the site template tree
    #[arg(long, value_name = "DIR")]
    pub site_dir: Option<PathBuf>,

    /// Directory holding JSON data files and copyable assets
    #[arg(long, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Directory where the rendered site will be written
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Marker prefix for entries that are skipped entirely
    #[arg(long, value_name = "MARKER")]
    pub skip_prefix: Option<String>,

    /// Marker prefix for entries that bind loaded data
    #[arg(long, value_name = "MARKER")]
    pub load_prefix: Option<String>,

    /// Marker prefix for entries copied verbatim from the content directory
    #[arg(long, value_name = "MARKER")]
    pub copy_prefix: Option<String>,

    /// Path to a configuration file (default: chisel.json if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
