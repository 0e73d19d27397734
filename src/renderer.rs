//! Template renderer and rendering functionality for chisel.
//! Wraps a MiniJinja environment rooted at the site directory, with
//! strict-undefined semantics and the `load`/`link` helpers registered.

use crate::content::ContentStore;
use crate::context::Context;
use crate::error::{Error, Result};
use minijinja::{path_loader, Environment, ErrorKind, State, UndefinedBehavior, Value};
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template identified by `template` (a path relative to
    /// the site root, `/`-separated) with the given binding context.
    ///
    /// # Errors
    /// Fails if the template cannot be found or if it references a name
    /// absent from the context (strict-undefined semantics).
    fn render(&self, template: &str, context: &Context) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer whose templates are loaded from `site_dir`.
    ///
    /// Two helper functions are registered in the environment:
    /// * `load(name)` — with the load-marker prefix, resolves a name that
    ///   is already bound in the active render context (an unbound name is
    ///   an undefined-variable error); without it, loads `<name>.json` from
    ///   the content store. The context comes from the render call itself,
    ///   never from shared mutable state.
    /// * `link(path)` — prefixes `/` to produce a site-absolute URL.
    pub fn new(site_dir: &Path, store: ContentStore, load_prefix: &str) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(site_dir));
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let prefix = load_prefix.to_string();
        env.add_function(
            "load",
            move |state: &State, name: String| -> std::result::Result<Value, minijinja::Error> {
                if let Some(bound) = name.strip_prefix(&prefix) {
                    state.lookup(bound).ok_or_else(|| {
                        minijinja::Error::new(
                            ErrorKind::UndefinedError,
                            format!("'{bound}' is not bound in the current context"),
                        )
                    })
                } else {
                    let data = store.load(&name).map_err(|e| {
                        minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string())
                    })?;
                    Ok(Value::from_serialize(&data))
                }
            },
        );
        env.add_function("link", |path: String| format!("/{path}"));

        Self { env }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &Context) -> Result<String> {
        let tmpl = self.env.get_template(template).map_err(Error::MinijinjaError)?;
        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}
