//! The site walker: a depth-first traversal of the site tree that
//! classifies each entry by marker prefix and dispatches it to copy,
//! render, recurse or load-and-branch handling.
//!
//! Traversal is single-threaded and strictly ordered. Within a directory,
//! entries are processed copies first, then templates, then plain
//! subdirectories, then load entries, names sorted within each class.
//! Any fatal error unwinds the entire run; a partially wrong site is
//! never published.

use crate::config::Config;
use crate::content::ContentStore;
use crate::context::Context;
use crate::copier;
use crate::entry::{self, EntryKind};
use crate::error::{Error, Result};
use crate::output;
use crate::renderer::TemplateRenderer;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Recursive site-walking engine.
pub struct Walker<'a> {
    config: &'a Config,
    content: &'a ContentStore,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Walker<'a> {
    pub fn new(
        config: &'a Config,
        content: &'a ContentStore,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self { config, content, renderer }
    }

    /// Performs one full traversal-and-render pass of the whole site tree.
    pub fn run(&self) -> Result<()> {
        self.walk("", &Context::new(), Path::new(""))
    }

    /// Walks the site subtree at `site_subdir` (a `/`-separated path
    /// relative to the site root), rendering templates under `context`
    /// and writing below `output_path` (relative to the output root).
    pub fn walk(&self, site_subdir: &str, context: &Context, output_path: &Path) -> Result<()> {
        let out_dir = self.config.output_dir.join(output_path);
        output::ensure_output_dir(&out_dir)?;

        let dir = self.config.site_dir.join(site_subdir);
        debug!("Walking {}", dir.display());

        let mut names = Vec::new();
        for dir_entry in fs::read_dir(&dir).map_err(Error::IoError)? {
            let dir_entry = dir_entry.map_err(Error::IoError)?;
            let name = dir_entry.file_name().into_string().map_err(|raw| {
                Error::EntryNameError {
                    name: raw.to_string_lossy().into_owned(),
                    reason: "entry name is not valid UTF-8".to_string(),
                }
            })?;
            let is_dir = dir_entry.file_type().map_err(Error::IoError)?.is_dir();
            names.push((name, is_dir));
        }
        names.sort();

        let mut copies = Vec::new();
        let mut templates = Vec::new();
        let mut subdirs = Vec::new();
        let mut loads = Vec::new();
        for (name, is_dir) in names {
            match entry::classify(&name, self.config)? {
                EntryKind::Skip => debug!("Skipping entry '{}'", name),
                EntryKind::Copy(path) => copies.push(path),
                EntryKind::Load { name: load_name, field } => {
                    loads.push((name, load_name, field))
                }
                EntryKind::Plain if is_dir => subdirs.push(name),
                EntryKind::Plain => templates.push(name),
            }
        }

        for path in &copies {
            copier::copy_entry(self.content, path, &out_dir)?;
        }

        for filename in &templates {
            let template_id = join_site_path(site_subdir, filename);
            debug!("Rendering template '{}'", template_id);
            let rendered = self.renderer.render(&template_id, context)?;
            output::write_rendered(&out_dir, filename, &rendered)?;
        }

        for name in &subdirs {
            let sub_dir = join_site_path(site_subdir, name);
            self.walk(&sub_dir, context, &output_path.join(name))?;
        }

        for (entry_name, name, field) in &loads {
            self.process_load(site_subdir, context, entry_name, name, field, output_path)?;
        }

        Ok(())
    }

    /// Resolves a load entry.
    ///
    /// An unbound `name` invokes the data loader and fans out: each loaded
    /// item is bound in a private copy of the context and processed in
    /// isolation, so no item's binding is visible to a sibling item's
    /// subtree. An already bound `name` is reused as-is, producing exactly
    /// one subtree without touching the loader again.
    fn process_load(
        &self,
        site_subdir: &str,
        context: &Context,
        entry_name: &str,
        name: &str,
        field: &str,
        output_path: &Path,
    ) -> Result<()> {
        if let Some(item) = context.get(name) {
            debug!("'{}' already bound, reusing the bound item", name);
            let item = item.clone();
            return self.apply_load(site_subdir, context, &item, entry_name, name, field, output_path);
        }

        let items = self.content.load_items(name)?;
        debug!("Loaded {} item(s) for '{}'", items.len(), name);
        for item in items {
            let branch = context.with(name, item.clone());
            self.apply_load(site_subdir, &branch, &item, entry_name, name, field, output_path)?;
        }
        Ok(())
    }

    /// Applies a load entry under a context where `name` is bound to `item`.
    ///
    /// A field carrying the copy marker names filenames on the item to copy
    /// into the current output directory. Any other field names a string
    /// value that becomes the next output path segment, and the load
    /// directory's contents are walked as a nested site subtree.
    #[allow(clippy::too_many_arguments)]
    fn apply_load(
        &self,
        site_subdir: &str,
        context: &Context,
        item: &Value,
        entry_name: &str,
        name: &str,
        field: &str,
        output_path: &Path,
    ) -> Result<()> {
        if let Some(copy_field) = field.strip_prefix(&self.config.copy_prefix) {
            let value = item.get(copy_field).ok_or_else(|| Error::MissingFieldError {
                name: name.to_string(),
                field: copy_field.to_string(),
            })?;
            let files = match value {
                Value::String(file) => vec![file.clone()],
                Value::Array(values) => values
                    .iter()
                    .map(|v| {
                        v.as_str().map(str::to_string).ok_or_else(|| Error::FieldValueError {
                            name: name.to_string(),
                            field: copy_field.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
                _ => {
                    return Err(Error::FieldValueError {
                        name: name.to_string(),
                        field: copy_field.to_string(),
                    })
                }
            };
            let out_dir = self.config.output_dir.join(output_path);
            for file in &files {
                copier::copy_entry(self.content, file, &out_dir)?;
            }
            Ok(())
        } else {
            let value = item.get(field).ok_or_else(|| Error::MissingFieldError {
                name: name.to_string(),
                field: field.to_string(),
            })?;
            let segment = value.as_str().ok_or_else(|| Error::FieldValueError {
                name: name.to_string(),
                field: field.to_string(),
            })?;
            let sub_dir = join_site_path(site_subdir, entry_name);
            self.walk(&sub_dir, context, &output_path.join(segment))
        }
    }
}

/// Joins a site-relative path with an entry name using `/` separators,
/// which is also how templates are addressed in the render environment.
fn join_site_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}/{name}")
    }
}
