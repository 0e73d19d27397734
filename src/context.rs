//! Binding context threaded through the site walk.
//! Holds the name/value pairs visible to template rendering and to
//! path-segment substitution at a given point of the traversal.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// An ordered, immutable mapping from variable names to JSON values.
///
/// Branching is copy-on-write by contract: [`Context::with`] returns a new
/// context and there is no mutating insert, so a binding introduced for one
/// subtree can never leak into a sibling subtree or back to the parent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Context {
    bindings: IndexMap<String, Value>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `name` is bound in this context.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Looks up the value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Returns a new context with `name` bound to `value` on top of the
    /// existing bindings. The receiver is left untouched.
    pub fn with(&self, name: &str, value: Value) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.to_string(), value);
        Self { bindings }
    }

    /// Number of bindings currently in scope.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no names are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_does_not_mutate_parent() {
        let parent = Context::new();
        let child = parent.with("post", json!({"slug": "a"}));

        assert!(child.contains("post"));
        assert!(!parent.contains("post"));
    }

    #[test]
    fn test_sibling_branches_are_isolated() {
        let base = Context::new();
        let first = base.with("post", json!({"slug": "a"}));
        let second = base.with("post", json!({"slug": "b"}));

        assert_eq!(first.get("post").unwrap()["slug"], "a");
        assert_eq!(second.get("post").unwrap()["slug"], "b");
    }

    #[test]
    fn test_rebinding_shadows_outer_value() {
        let outer = Context::new().with("page", json!({"title": "old"}));
        let inner = outer.with("page", json!({"title": "new"}));

        assert_eq!(inner.get("page").unwrap()["title"], "new");
        assert_eq!(outer.get("page").unwrap()["title"], "old");
    }
}
