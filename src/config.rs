//! Configuration handling for chisel sites.
//! Layers three sources, later ones winning: built-in defaults, an optional
//! `chisel.json` file, and command-line flags.

use crate::cli::Args;
use crate::constants::{
    CONFIG_FILE, DEFAULT_CONTENT_DIR, DEFAULT_COPY_PREFIX, DEFAULT_LOAD_PREFIX,
    DEFAULT_OUTPUT_DIR, DEFAULT_SITE_DIR, DEFAULT_SKIP_PREFIX,
};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resolved configuration for one generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the site template tree
    pub site_dir: PathBuf,
    /// Directory holding JSON data files and copyable assets
    pub content_dir: PathBuf,
    /// Directory the rendered site is written to
    pub output_dir: PathBuf,
    /// Marker prefix for entries that are skipped entirely
    pub skip_prefix: String,
    /// Marker prefix for entries that bind loaded data
    pub load_prefix: String,
    /// Marker prefix for entries copied verbatim from the content directory
    pub copy_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            skip_prefix: DEFAULT_SKIP_PREFIX.to_string(),
            load_prefix: DEFAULT_LOAD_PREFIX.to_string(),
            copy_prefix: DEFAULT_COPY_PREFIX.to_string(),
        }
    }
}

/// Builds the effective configuration from an optional config file and
/// command-line overrides.
///
/// # Errors
/// * `Error::ConfigError` if an explicitly given config file is missing,
///   if the file is not valid JSON, or if a marker prefix is empty or
///   collides with another
pub fn get_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path, true)?,
        None => load_config_file(Path::new(CONFIG_FILE), false)?,
    };

    if let Some(dir) = &args.site_dir {
        config.site_dir = dir.clone();
    }
    if let Some(dir) = &args.content_dir {
        config.content_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(prefix) = &args.skip_prefix {
        config.skip_prefix = prefix.clone();
    }
    if let Some(prefix) = &args.load_prefix {
        config.load_prefix = prefix.clone();
    }
    if let Some(prefix) = &args.copy_prefix {
        config.copy_prefix = prefix.clone();
    }

    validate_markers(&config)?;
    Ok(config)
}

fn load_config_file(path: &Path, required: bool) -> Result<Config> {
    if !path.exists() {
        if required {
            return Err(Error::ConfigError(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        debug!("No {} found, using defaults", CONFIG_FILE);
        return Ok(Config::default());
    }

    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e)))
}

/// The three markers are matched by fixed precedence (skip > copy > load),
/// so they only need to be non-empty and pairwise distinct.
fn validate_markers(config: &Config) -> Result<()> {
    let markers = [
        ("skip_prefix", &config.skip_prefix),
        ("copy_prefix", &config.copy_prefix),
        ("load_prefix", &config.load_prefix),
    ];
    for (key, marker) in &markers {
        if marker.is_empty() {
            return Err(Error::ConfigError(format!("{} must not be empty", key)));
        }
    }
    for i in 0..markers.len() {
        for j in (i + 1)..markers.len() {
            if markers[i].1 == markers[j].1 {
                return Err(Error::ConfigError(format!(
                    "{} and {} must differ (both are '{}')",
                    markers[i].0, markers[j].0, markers[i].1
                )));
            }
        }
    }
    Ok(())
}
