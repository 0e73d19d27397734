//! Content data loading for chisel sites.
//! Flat JSON files under the content root are addressed by bare name:
//! `store.load("post")` reads and parses `<content root>/post.json`.

use crate::error::{Error, Result};
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads JSON data files from the content root.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    /// Creates a store rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// The content root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads `<name>.json` from the content root.
    ///
    /// # Errors
    /// * `Error::ContentError` if the file is absent or not valid JSON
    pub fn load(&self, name: &str) -> Result<Value> {
        let path = self.root.join(format!("{name}.json"));
        debug!("Loading content '{}' from {}", name, path.display());
        let raw = fs::read_to_string(&path).map_err(|e| Error::ContentError {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| Error::ContentError {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Loads `name` and normalizes the result to a list of items: a JSON
    /// array is returned as-is, anything else becomes a one-element list.
    /// Callers iterating over loaded data never special-case arity.
    pub fn load_items(&self, name: &str) -> Result<Vec<Value>> {
        match self.load(name)? {
            Value::Array(items) => Ok(items),
            single => Ok(vec![single]),
        }
    }
}
