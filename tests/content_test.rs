use std::fs;

use chisel::content::ContentStore;
use chisel::error::Error;
use serde_json::json;
use tempfile::TempDir;

fn store_with(files: &[(&str, &str)]) -> (TempDir, ContentStore) {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    let store = ContentStore::new(dir.path());
    (dir, store)
}

#[test]
fn test_load_parses_json_by_name() {
    let (_dir, store) = store_with(&[("site.json", r#"{"title": "home"}"#)]);

    let value = store.load("site").unwrap();

    assert_eq!(value, json!({"title": "home"}));
}

#[test]
fn test_load_items_passes_arrays_through() {
    let (_dir, store) = store_with(&[("post.json", r#"[{"slug": "a"}, {"slug": "b"}]"#)]);

    let items = store.load_items("post").unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0], json!({"slug": "a"}));
}

#[test]
fn test_load_items_normalizes_single_object() {
    let (_dir, store) = store_with(&[("page.json", r#"{"slug": "only"}"#)]);

    let items = store.load_items("page").unwrap();

    assert_eq!(items, vec![json!({"slug": "only"})]);
}

#[test]
fn test_missing_content_file() {
    let (_dir, store) = store_with(&[]);

    let err = store.load("ghost").unwrap_err();

    assert!(matches!(err, Error::ContentError { ref name, .. } if name == "ghost"));
}

#[test]
fn test_malformed_json() {
    let (_dir, store) = store_with(&[("bad.json", "{not json")]);

    let err = store.load("bad").unwrap_err();

    assert!(matches!(err, Error::ContentError { ref name, .. } if name == "bad"));
}
