//! Site entry classification.
//! Directory entry names encode control flow through reserved marker
//! prefixes; this module turns a raw name into a tagged [`EntryKind`]
//! exactly once, so no other code re-derives prefixes ad hoc.

use crate::config::Config;
use crate::error::{Error, Result};

/// What the walker should do with a directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Ignore the entry (and its whole subtree) completely.
    Skip,
    /// Copy the named content-root-relative path into the current output
    /// directory, verbatim.
    Copy(String),
    /// Bind data loaded by `name` and resolve `field` against each bound
    /// item. `field` may itself carry the copy marker, in which case it
    /// names a field holding filenames to copy rather than a path segment.
    Load { name: String, field: String },
    /// A regular template file or site subdirectory.
    Plain,
}

/// Classifies `entry_name` by marker prefix.
///
/// Precedence is fixed: skip > copy > load > plain. The copy marker is
/// checked before the load marker because the default copy marker (`b%`)
/// contains the default load marker (`%`) as a substring.
///
/// # Errors
/// * `Error::EntryNameError` if a load entry lacks the `name.field` shape
pub fn classify(entry_name: &str, config: &Config) -> Result<EntryKind> {
    if entry_name.starts_with(&config.skip_prefix) {
        return Ok(EntryKind::Skip);
    }
    if let Some(path) = entry_name.strip_prefix(&config.copy_prefix) {
        return Ok(EntryKind::Copy(path.to_string()));
    }
    if let Some(spec) = entry_name.strip_prefix(&config.load_prefix) {
        let (name, field) = spec.split_once('.').ok_or_else(|| Error::EntryNameError {
            name: entry_name.to_string(),
            reason: "load entry must look like <name>.<field>".to_string(),
        })?;
        return Ok(EntryKind::Load {
            name: name.to_string(),
            field: field.to_string(),
        });
    }
    Ok(EntryKind::Plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn test_skip_takes_precedence() {
        assert_eq!(classify("_drafts", &config()).unwrap(), EntryKind::Skip);
    }

    #[test]
    fn test_copy_checked_before_load() {
        // the copy marker contains the load marker as a substring, so
        // precedence has to pick copy first
        assert_eq!(
            classify("b%style.css", &config()).unwrap(),
            EntryKind::Copy("style.css".to_string())
        );
    }

    #[test]
    fn test_load_splits_on_first_dot() {
        assert_eq!(
            classify("%post.slug", &config()).unwrap(),
            EntryKind::Load {
                name: "post".to_string(),
                field: "slug".to_string(),
            }
        );
    }

    #[test]
    fn test_load_field_keeps_copy_marker() {
        assert_eq!(
            classify("%post.b%images", &config()).unwrap(),
            EntryKind::Load {
                name: "post".to_string(),
                field: "b%images".to_string(),
            }
        );
    }

    #[test]
    fn test_load_without_dot_is_an_error() {
        assert!(classify("%post", &config()).is_err());
    }

    #[test]
    fn test_everything_else_is_plain() {
        assert_eq!(classify("about.html", &config()).unwrap(), EntryKind::Plain);
        assert_eq!(classify("posts", &config()).unwrap(), EntryKind::Plain);
    }
}
