//! Tests for the Entry and Namespace types.

use waypost::{AliasError, Entry, Namespace};

#[test]
fn test_entry_type_checking_accessors() {
    let path = Entry::from("/var/www");
    assert!(path.is_path());
    assert!(!path.is_namespace());
    assert_eq!(path.type_name(), "path");
    assert_eq!(path.as_path(), Some("/var/www"));
    assert!(path.as_namespace().is_none());

    let namespace = Entry::Namespace(Namespace::new());
    assert!(namespace.is_namespace());
    assert!(!namespace.is_path());
    assert_eq!(namespace.type_name(), "namespace");
    assert!(namespace.as_path().is_none());
}

#[test]
fn test_entry_namespace_mutation_through_accessor() {
    let namespace: Namespace = [("@app", "/var/www")].into_iter().collect();
    let mut entry = Entry::from(namespace);

    entry
        .as_namespace_mut()
        .unwrap()
        .insert("@app/runtime", "/var/www/runtime");
    assert_eq!(entry.as_namespace().unwrap().len(), 2);

    // Path entries expose no namespace to mutate.
    assert!(Entry::from("/var/www").as_namespace_mut().is_none());
}

#[test]
fn test_entry_string_comparisons_are_symmetric() {
    let entry = Entry::from("/var/www");

    assert!(entry == "/var/www");
    assert!("/var/www" == entry);
    assert!(entry == "/var/www".to_string());
    assert!(entry != "/srv/www");

    // A namespace never compares equal to a path string.
    let namespace = Entry::Namespace(Namespace::new());
    assert!(namespace != "/var/www");
}

#[test]
fn test_entry_try_from_type_mismatch() {
    let namespace = Entry::Namespace(Namespace::new());
    let err = String::try_from(&namespace).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(
        err.to_string(),
        "alias entry type mismatch: expected path, found namespace"
    );

    let path = Entry::from("/var/www");
    assert_eq!(String::try_from(&path).unwrap(), "/var/www");
    assert!(Namespace::try_from(&path).is_err());
}

#[test]
fn test_alias_error_converts_into_crate_error() {
    let err = AliasError::TypeMismatch {
        expected: "path".to_string(),
        actual: "namespace".to_string(),
    };
    let err: waypost::Error = err.into();
    assert_eq!(err.module(), "alias");
    assert!(err.is_type_error());
}

#[test]
fn test_namespace_iterates_in_descending_key_order() {
    let mut namespace = Namespace::new();
    namespace.insert("@app", "/var/www");
    namespace.insert("@app/runtime/cache", "/tmp/cache");
    namespace.insert("@app/runtime", "/var/www/runtime");

    let keys: Vec<&str> = namespace.keys().collect();
    assert_eq!(keys, ["@app/runtime/cache", "@app/runtime", "@app"]);

    let pairs: Vec<(&str, &str)> = namespace.iter().collect();
    assert_eq!(pairs[0], ("@app/runtime/cache", "/tmp/cache"));
    assert_eq!(pairs[2], ("@app", "/var/www"));
}

#[test]
fn test_namespace_resolve_longest_prefix_wins() {
    let namespace: Namespace = [
        ("@app", "/var/www"),
        ("@app/runtime", "/var/www/runtime"),
    ]
    .into_iter()
    .collect();

    assert_eq!(namespace.resolve("@app").as_deref(), Some("/var/www"));
    assert_eq!(
        namespace.resolve("@app/runtime").as_deref(),
        Some("/var/www/runtime")
    );
    assert_eq!(
        namespace.resolve("@app/runtime/logs").as_deref(),
        Some("/var/www/runtime/logs")
    );
    assert_eq!(namespace.resolve("@app/public").as_deref(), Some("/var/www/public"));
    assert_eq!(namespace.resolve("@other"), None);
}

#[test]
fn test_namespace_resolve_requires_segment_boundary() {
    let namespace: Namespace = [("@app/run", "/r")].into_iter().collect();

    assert_eq!(namespace.resolve("@app/run").as_deref(), Some("/r"));
    assert_eq!(namespace.resolve("@app/run/x").as_deref(), Some("/r/x"));
    assert_eq!(namespace.resolve("@app/runtime"), None);
}

#[test]
fn test_namespace_insert_and_remove() {
    let mut namespace = Namespace::new();
    assert!(namespace.is_empty());

    assert_eq!(namespace.insert("@a", "/1"), None);
    assert_eq!(namespace.insert("@a", "/2").as_deref(), Some("/1"));
    assert_eq!(namespace.len(), 1);
    assert!(namespace.contains_key("@a"));

    assert_eq!(namespace.remove("@a").as_deref(), Some("/2"));
    assert_eq!(namespace.remove("@a"), None);
    assert!(namespace.is_empty());
}

#[test]
fn test_display_formatting() {
    let entry = Entry::from("/var/www");
    assert_eq!(entry.to_string(), "/var/www");

    let namespace: Namespace = [
        ("@app", "/var/www"),
        ("@app/runtime", "/var/www/runtime"),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        namespace.to_string(),
        "{@app/runtime: /var/www/runtime, @app: /var/www}"
    );
    assert_eq!(Entry::Namespace(namespace).to_string(), "{@app/runtime: /var/www/runtime, @app: /var/www}");
}
