//! Repository Layer - Core Traits
//!
//! Defines the abstract string key-value interface.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::DomainResult;

/// String key-value storage
///
/// Encoding is the caller's job; the store only moves strings.
/// Methods take `&self` because browser storage is a shared handle.
pub trait KeyValueStore {
    /// Read a value, `None` when the key is absent
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Remove a key; absent keys are not an error
    fn remove(&self, key: &str) -> DomainResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        (**self).remove(key)
    }
}
