//! Entry types for the alias table.
//!
//! This module provides the Entry enum that represents everything a root can
//! map to in the alias table: either a single resolved path (a simple alias)
//! or an ordered namespace of sub-aliases sharing that root.

use std::fmt;

use crate::alias::errors::AliasError;
use crate::alias::namespace::Namespace;

/// A top-level entry in the alias table, keyed by root.
///
/// A root is never simultaneously both variants: registering a longer key
/// under a root that holds a [`Entry::Path`] promotes it to
/// [`Entry::Namespace`], carrying the old path along as the namespace entry
/// for the root itself.
///
/// # Direct Comparisons
///
/// `Entry` implements `PartialEq` with string types for ergonomic
/// comparisons against the resolved path:
///
/// ```
/// # use waypost::Entry;
/// let entry = Entry::from("/var/www");
/// assert!(entry == "/var/www");
/// assert!("/var/www" == entry);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Entry {
    /// A single fully-resolved path.
    Path(String),
    /// An ordered set of sub-aliases sharing this root, most specific first.
    Namespace(Namespace),
}

impl Entry {
    /// Returns true if this entry holds a single resolved path
    pub fn is_path(&self) -> bool {
        matches!(self, Entry::Path(_))
    }

    /// Returns true if this entry holds a namespace of sub-aliases
    pub fn is_namespace(&self) -> bool {
        matches!(self, Entry::Namespace(_))
    }

    /// Returns the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Entry::Path(_) => "path",
            Entry::Namespace(_) => "namespace",
        }
    }

    /// Attempts to view this entry as a resolved path
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Entry::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Attempts to view this entry as a namespace (immutable reference)
    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            Entry::Namespace(namespace) => Some(namespace),
            _ => None,
        }
    }

    /// Attempts to view this entry as a mutable namespace reference
    pub fn as_namespace_mut(&mut self) -> Option<&mut Namespace> {
        match self {
            Entry::Namespace(namespace) => Some(namespace),
            _ => None,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Path(path) => write!(f, "{path}"),
            Entry::Namespace(namespace) => write!(f, "{namespace}"),
        }
    }
}

// Convenient From implementations for terminal paths and namespaces
impl From<String> for Entry {
    fn from(path: String) -> Self {
        Entry::Path(path)
    }
}

impl From<&str> for Entry {
    fn from(path: &str) -> Self {
        Entry::Path(path.to_string())
    }
}

impl From<Namespace> for Entry {
    fn from(namespace: Namespace) -> Self {
        Entry::Namespace(namespace)
    }
}

// TryFrom implementations for typed extraction
impl TryFrom<&Entry> for String {
    type Error = AliasError;

    fn try_from(entry: &Entry) -> Result<Self, Self::Error> {
        match entry {
            Entry::Path(path) => Ok(path.clone()),
            _ => Err(AliasError::TypeMismatch {
                expected: "path".to_string(),
                actual: entry.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Entry> for Namespace {
    type Error = AliasError;

    fn try_from(entry: &Entry) -> Result<Self, Self::Error> {
        match entry {
            Entry::Namespace(namespace) => Ok(namespace.clone()),
            _ => Err(AliasError::TypeMismatch {
                expected: "namespace".to_string(),
                actual: entry.type_name().to_string(),
            }),
        }
    }
}

// PartialEq implementations for comparing Entry with string types
impl PartialEq<str> for Entry {
    fn eq(&self, other: &str) -> bool {
        match self {
            Entry::Path(path) => path == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Entry {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Entry {
    fn eq(&self, other: &String) -> bool {
        match self {
            Entry::Path(path) => path == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Entry> for str {
    fn eq(&self, other: &Entry) -> bool {
        other == self
    }
}

impl PartialEq<Entry> for &str {
    fn eq(&self, other: &Entry) -> bool {
        other == *self
    }
}

impl PartialEq<Entry> for String {
    fn eq(&self, other: &Entry) -> bool {
        other == self
    }
}
