//! Chisel is a data-bound static site generator.
//! It walks a directory tree of templates, binds JSON-sourced data to each
//! template, and writes rendered output files to a mirrored output tree.
//! Directory names encode control flow: reserved marker prefixes declare
//! whether an entry is skipped, copied verbatim, expanded per loaded data
//! item, or rendered in place.

/// Command-line interface module for the chisel application
pub mod cli;

/// Configuration handling for chisel sites
/// Layers defaults, an optional chisel.json file and CLI flags
pub mod config;

/// Common constants: default directories and marker prefixes
pub mod constants;

/// Content data loading from flat JSON files
pub mod content;

/// Binding context threaded through the site walk
pub mod context;

/// Verbatim asset copying from the content root into the output tree
pub mod copier;

/// Site entry classification by marker prefix
pub mod entry;

/// Error types and handling for the chisel application
pub mod error;

/// Logger initialization
pub mod logger;

/// Output directory creation and rendered-template writing
pub mod output;

/// Template rendering via MiniJinja
/// Handles strict-undefined semantics and the load/link helpers
pub mod renderer;

/// Core recursive site-walking and data-binding engine
pub mod walker;
