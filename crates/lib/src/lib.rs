//!
//! Waypost: an in-memory path-alias registry.
//! This library maps short symbolic names to absolute paths so that other
//! subsystems can reference locations indirectly and physical paths can
//! change without touching consumers.
//!
//! ## Core Concepts
//!
//! Waypost is built around a handful of key concepts:
//!
//! * **Alias keys (`alias::key`)**: Strings starting with the `@` sentinel, optionally qualified with `/` separators. The first segment is the **root**, the only part the top-level table is keyed by.
//! * **Entries (`alias::Entry`)**: What a root maps to: a single resolved path, or a namespace of sub-aliases once more than one alias shares the root.
//! * **Namespaces (`alias::Namespace`)**: Ordered sub-alias maps kept in descending key order, so a prefix scan always meets the most specific alias first.
//! * **The table (`alias::AliasTable`)**: The registry itself. Registration resolves indirect values eagerly, lookups are exact root lookups, and the whole surface follows a generic caching contract (an accepted-but-ignored TTL included) so it can stand in behind one.

pub mod alias;

/// Re-export the core alias types for easier access.
pub use alias::{AliasError, AliasTable, Entry, Namespace};

/// Result type used throughout the Waypost library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Waypost library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured alias errors from the alias module
    #[error(transparent)]
    Alias(alias::AliasError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Alias(_) => "alias",
        }
    }

    /// Check if this error is a typed-conversion mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Alias(alias_err) => alias_err.is_type_error(),
        }
    }
}
