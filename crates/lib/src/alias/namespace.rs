//! Ordered namespaces of sub-aliases.
//!
//! A [`Namespace`] holds every alias registered under one root, keyed by the
//! full qualified alias. Iteration order is always descending lexicographic
//! key order, so a prefix scan encounters the most specific (longest)
//! registered alias first. The ordering falls out of the backing `BTreeMap`
//! and reversed iteration rather than a re-sort on every mutation, so it
//! cannot be violated by a missed sort.

use std::collections::BTreeMap;
use std::fmt;

use crate::alias::key::SEPARATOR;

/// An ordered mapping from full qualified alias key to resolved path.
///
/// # Examples
///
/// ```
/// # use waypost::Namespace;
/// let mut namespace = Namespace::new();
/// namespace.insert("@app", "/var/www");
/// namespace.insert("@app/runtime", "/var/www/runtime");
///
/// // Most specific key first, regardless of insertion order.
/// let keys: Vec<&str> = namespace.keys().collect();
/// assert_eq!(keys, ["@app/runtime", "@app"]);
///
/// // Longest-prefix resolution with the remainder appended.
/// assert_eq!(
///     namespace.resolve("@app/runtime/logs").as_deref(),
///     Some("/var/www/runtime/logs"),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Namespace {
    entries: BTreeMap<String, String>,
}

impl Namespace {
    /// Creates a new empty namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of aliases in this namespace
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this namespace has no aliases
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the namespace contains the exact alias key
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Gets the resolved path for an exact alias key
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.entries.get(key.as_ref()).map(String::as_str)
    }

    /// Inserts or overwrites an alias, returning the previous path if present.
    ///
    /// The descending ordering is maintained by construction.
    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), path.into())
    }

    /// Removes an alias by exact key, returning its path if present
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<String> {
        self.entries.remove(key.as_ref())
    }

    /// Returns an iterator over `(key, path)` pairs in descending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .rev()
            .map(|(key, path)| (key.as_str(), path.as_str()))
    }

    /// Returns an iterator over alias keys in descending order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().rev().map(String::as_str)
    }

    /// Resolves an alias against this namespace by longest matching prefix.
    ///
    /// Scans entries most-specific-first and returns the first entry whose
    /// key equals the alias, or is a proper prefix of it ending at a `/`
    /// boundary. For a prefix hit, the unmatched remainder of the alias is
    /// appended to the stored path.
    pub fn resolve(&self, alias: &str) -> Option<String> {
        for (key, path) in self.iter() {
            if let Some(rest) = alias.strip_prefix(key) {
                if rest.is_empty() {
                    return Some(path.to_string());
                }
                if rest.starts_with(SEPARATOR) {
                    return Some(format!("{path}{rest}"));
                }
            }
        }
        None
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, path)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {path}")?;
        }
        write!(f, "}}")
    }
}

impl<K, V> FromIterator<(K, V)> for Namespace
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Namespace {
            entries: iter
                .into_iter()
                .map(|(key, path)| (key.into(), path.into()))
                .collect(),
        }
    }
}
