//! The alias table and its registration algorithm.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, trace};

use crate::alias::entry::Entry;
use crate::alias::key::{self, SENTINEL};
use crate::alias::namespace::Namespace;

/// An in-memory registry mapping alias keys to resolved paths.
///
/// The table is keyed by **root** (the first segment of an alias key); each
/// root holds either a single path or a [`Namespace`] of sub-aliases. It is
/// a plain, exclusively-owned value: mutation goes through `&mut self`, and
/// any cross-thread sharing must be serialized by the embedding system.
///
/// The `set`/`get`/`delete`/`clear` surface follows the shape of a generic
/// caching contract: every mutating operation reports success, misses come
/// back as `None` or the caller's default, and a TTL argument is accepted
/// but has no effect; aliases never expire.
///
/// # Examples
///
/// ## Registration and lookup
/// ```
/// # use waypost::AliasTable;
/// let mut aliases = AliasTable::new();
/// aliases.set("@app", Some("/var/www"), None);
///
/// assert!(aliases.has("@app"));
/// assert_eq!(aliases.get("@app").unwrap(), "/var/www");
/// assert_eq!(aliases.get_or("@missing", "?"), "?");
/// ```
///
/// ## Namespacing
/// ```
/// # use waypost::AliasTable;
/// let mut aliases = AliasTable::new();
/// aliases.set("@app", Some("/var/www"), None);
/// aliases.set("@app/runtime", Some("/var/www/runtime"), None);
///
/// // The root was promoted to a namespace holding both aliases.
/// let namespace = aliases.get("@app").unwrap().as_namespace().unwrap();
/// assert_eq!(namespace.get("@app/runtime"), Some("/var/www/runtime"));
/// assert_eq!(namespace.get("@app"), Some("/var/www"));
/// ```
///
/// ## Indirect aliases
/// ```
/// # use waypost::AliasTable;
/// let mut aliases = AliasTable::new();
/// aliases.set("@app", Some("/var/www"), None);
/// aliases.set("@web", Some("@app/public"), None);
///
/// // Resolved eagerly at registration time, not at lookup time.
/// assert_eq!(aliases.get("@web").unwrap(), "/var/www/public");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AliasTable {
    entries: HashMap<String, Entry>,
}

impl AliasTable {
    /// Creates a new empty alias table
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of root entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no roots are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the registered root keys
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Gets the entry registered under exactly `key`.
    ///
    /// This is a root-only lookup: the key is taken as given (callers are
    /// expected to pass normalized `@`-prefixed keys) and namespace
    /// sub-entries are not searched. `get("@app/runtime")` misses even when
    /// the `@app` namespace holds that alias; reach through
    /// [`Entry::as_namespace`] for sub-entries.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Entry> {
        self.entries.get(key.as_ref())
    }

    /// Gets the entry under `key`, or the supplied default on a miss
    pub fn get_or(&self, key: impl AsRef<str>, default: impl Into<Entry>) -> Entry {
        match self.get(key.as_ref()) {
            Some(entry) => entry.clone(),
            None => default.into(),
        }
    }

    /// Returns true if a root entry exists under exactly `key`.
    ///
    /// Like [`get`](Self::get), this never walks into namespaces.
    pub fn has(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Registers, overwrites, or removes an alias. Always returns true.
    ///
    /// The key is normalized (`@` prepended when missing, an empty key
    /// becomes `@`). A `Some` value registers: terminal values have
    /// trailing `/` and `\` stripped, while values starting with `@` are
    /// resolved through the table immediately so the stored value is always
    /// a terminal path. A `None` value removes the alias instead, so set
    /// doubles as unset.
    ///
    /// `_ttl` is accepted for cache-contract compatibility only; aliases
    /// never expire.
    pub fn set(
        &mut self,
        key: impl AsRef<str>,
        value: Option<&str>,
        _ttl: Option<Duration>,
    ) -> bool {
        match value {
            Some(value) => self.register(key.as_ref(), value),
            None => self.unregister(key.as_ref()),
        }
        true
    }

    /// Removes the root entry stored under exactly `key`. Always returns true.
    ///
    /// No normalization and no root computation: this drops a whole
    /// top-level entry, namespace and all. To remove a single sub-alias,
    /// use [`set`](Self::set) with a `None` value.
    pub fn delete(&mut self, key: impl AsRef<str>) -> bool {
        let key = key.as_ref();
        if self.entries.remove(key).is_some() {
            trace!(key, "deleted root entry");
        }
        true
    }

    /// Removes every entry. Always returns true.
    pub fn clear(&mut self) -> bool {
        debug!(roots = self.entries.len(), "clearing alias table");
        self.entries.clear();
        true
    }

    /// Looks up each key in order, filling misses with the default.
    ///
    /// The result preserves the caller-supplied key order.
    pub fn get_multiple<I>(&self, keys: I, default: impl Into<Entry>) -> Vec<(String, Entry)>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let default = default.into();
        keys.into_iter()
            .map(|key| {
                let key = key.as_ref();
                (key.to_string(), self.get_or(key, default.clone()))
            })
            .collect()
    }

    /// Applies [`set`](Self::set) to each pair in order. Always returns true.
    pub fn set_multiple<K, V, I>(&mut self, values: I, ttl: Option<Duration>) -> bool
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in values {
            self.set(key.as_ref(), value.as_ref().map(|v| v.as_ref()), ttl);
        }
        true
    }

    /// Applies [`delete`](Self::delete) to each key in order. Always returns true.
    pub fn delete_multiple<I>(&mut self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for key in keys {
            self.delete(key);
        }
        true
    }

    /// Registers `value` under the normalized `key`.
    ///
    /// The per-root state transition:
    /// - unset root: stored as a path for a bare key, or a one-entry
    ///   namespace for a qualified one;
    /// - simple root: overwritten by a bare key, promoted to a namespace by
    ///   a qualified one (the old path survives under the root key);
    /// - namespace root: the alias is inserted or overwritten, including
    ///   the bare root key itself.
    fn register(&mut self, key: &str, value: &str) {
        let key = key::normalize(key).into_owned();
        let (root, separator) = key::split_root(&key);

        let path = if value.starts_with(SENTINEL) {
            match self.resolve(value) {
                Some(path) => path,
                None => {
                    // An indirect alias to nothing behaves as an unset.
                    trace!(key = %key, value, "indirect alias target not registered");
                    self.unregister(&key);
                    return;
                }
            }
        } else {
            value.trim_end_matches(['/', '\\']).to_string()
        };

        trace!(key = %key, path = %path, "registering alias");
        let entry = match (self.entries.remove(root), separator) {
            (None, None) => Entry::Path(path),
            (Some(Entry::Path(_)), None) => Entry::Path(path),
            (None, Some(_)) => {
                let mut namespace = Namespace::new();
                namespace.insert(key.as_str(), path);
                Entry::Namespace(namespace)
            }
            (Some(Entry::Path(existing)), Some(_)) => {
                let mut namespace = Namespace::new();
                namespace.insert(root, existing);
                namespace.insert(key.as_str(), path);
                Entry::Namespace(namespace)
            }
            (Some(Entry::Namespace(mut namespace)), _) => {
                namespace.insert(key.as_str(), path);
                Entry::Namespace(namespace)
            }
        };
        self.entries.insert(root.to_string(), entry);
    }

    /// Removes the normalized `key`, leaving sibling aliases untouched.
    ///
    /// A qualified key is removed from its root's namespace (an emptied
    /// namespace stays registered); a bare key removes a simple root
    /// outright. A qualified key under a simple root is a no-op; nothing
    /// was ever distinctly stored for it.
    fn unregister(&mut self, key: &str) {
        let key = key::normalize(key);
        let (root, separator) = key::split_root(&key);

        let remove_root = match self.entries.get_mut(root) {
            Some(Entry::Namespace(namespace)) => {
                if namespace.remove(key.as_ref()).is_some() {
                    trace!(key = %key, "unregistered alias");
                }
                false
            }
            Some(Entry::Path(_)) => separator.is_none(),
            None => false,
        };
        if remove_root {
            self.entries.remove(root);
            trace!(key = %key, "unregistered alias");
        }
    }

    /// Resolves an alias to its terminal path, longest registered prefix
    /// first.
    ///
    /// This is the registration-time lookup backing indirect values; the
    /// public surface deliberately stays root-exact. A simple root matches
    /// its own key, with any remainder of a longer alias appended to the
    /// stored path; a namespace root delegates to [`Namespace::resolve`].
    pub(crate) fn resolve(&self, alias: &str) -> Option<String> {
        let (root, separator) = key::split_root(alias);
        match self.entries.get(root)? {
            Entry::Path(path) => match separator {
                None => Some(path.clone()),
                Some(pos) => Some(format!("{path}{}", &alias[pos..])),
            },
            Entry::Namespace(namespace) => namespace.resolve(alias),
        }
    }
}
