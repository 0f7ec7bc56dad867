// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-object backing storage for configuration values.
//!
//! # Implementation
//!
//! Entries live in a vector sorted by name and are found by binary search.
//! Configuration objects usually carry a handful of properties, so the first
//! few entries are stored inline via `SmallVec`.

use alloc::string::String;
use smallvec::SmallVec;

use crate::value::Value;

/// Inline capacity for store entries.
const INLINE_CAPACITY: usize = 8;

/// The mutable data holder behind a set of accessor pairs.
///
/// A store belongs to exactly one configuration object. It may be seeded
/// with raw, uncoerced values before properties are declared; declaration
/// re-runs each property's setter over the seeded value.
///
/// # Example
///
/// ```rust
/// use crosswalk_config::{BackingStore, Value};
///
/// let mut store = BackingStore::new();
/// store.insert("port", "5900");
/// assert_eq!(store.get("port"), Some(&Value::from("5900")));
/// assert!(store.get("host").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct BackingStore {
    entries: SmallVec<[(String, Value); INLINE_CAPACITY]>,
}

impl BackingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn find(&self, name: &str) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(key, _)| key.as_str().cmp(name))
    }

    /// Returns the stored value for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.find(name).ok().map(|idx| &self.entries[idx].1)
    }

    /// Returns `true` if a value is stored for `name`.
    ///
    /// A stored [`Value::Undefined`] counts as unset.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_undefined())
    }

    /// Stores `value` under `name`, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.find(&name) {
            Ok(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            Err(idx) => {
                self.entries.insert(idx, (name, value));
                None
            }
        }
    }

    /// Removes the value stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.find(name).ok().map(|idx| self.entries.remove(idx).1)
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for BackingStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (k, v) in iter {
            store.insert(k, v);
        }
        store
    }
}
