//! Error handling for the chisel application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for chisel operations.
///
/// This enum represents all possible errors that can occur while walking
/// and rendering a site tree. It implements the standard Error trait
/// through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine, including
    /// undefined-variable errors in strict mode
    #[error("Template error: {0:#}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during configuration parsing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A content JSON file could not be read or parsed
    #[error("Content error: cannot load '{name}': {reason}.")]
    ContentError { name: String, reason: String },

    /// A site entry name does not follow the expected marker grammar
    #[error("Invalid entry name '{name}': {reason}.")]
    EntryNameError { name: String, reason: String },

    /// A field lookup on a loaded item missed the expected key
    #[error("Missing field '{field}' on loaded item '{name}'.")]
    MissingFieldError { name: String, field: String },

    /// A field used as an output path segment is not a string
    #[error("Field '{field}' of '{name}' is not a path-like string.")]
    FieldValueError { name: String, field: String },

    /// A copy source is neither a file nor a directory
    #[error("Copy source does not exist: '{path}'.")]
    CopySourceError { path: String },
}

/// Convenience type alias for Results with chisel's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
