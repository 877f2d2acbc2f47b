//! Ordered map of records keyed by identifier
//!
//! ## Bound queries
//!
//! - `lower_bound(k)`: first entry whose key is not less than `k`
//! - `upper_bound(k)`: first entry whose key is greater than `k`
//!
//! For keys `1..=10`, `upper_bound(5)` lands on 6 and `lower_bound(5)` on 5.

use crate::access::HasRecord;
use roster_core::{Error, Result};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use tracing::debug;

/// Records keyed by the identifier they were inserted under
#[derive(Debug)]
pub struct RecordMap<V> {
    entries: BTreeMap<u32, V>,
}

impl<V> Default for RecordMap<V> {
    fn default() -> Self {
        RecordMap {
            entries: BTreeMap::new(),
        }
    }
}

impl<V: HasRecord> RecordMap<V> {
    /// Build a map from records, keyed by their identifiers
    ///
    /// When two values share an identifier the first one is kept and the
    /// later one is dropped.
    pub fn from_records<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut map = Self::default();
        for value in values {
            map.insert(value);
        }
        debug!(len = map.len(), "Record map built");
        map
    }

    /// Insert under the value's identifier unless the key is taken
    ///
    /// Returns `false`, dropping `value`, when the key already exists.
    pub fn insert(&mut self, value: V) -> bool {
        let key = value.id();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value);
        true
    }
}

impl<V> RecordMap<V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`
    pub fn find(&self, key: u32) -> Option<&V> {
        self.entries.get(&key)
    }

    /// First entry with key `>= key`
    pub fn lower_bound(&self, key: u32) -> Option<(&u32, &V)> {
        self.entries.range(key..).next()
    }

    /// First entry with key `> key`
    pub fn upper_bound(&self, key: u32) -> Option<(&u32, &V)> {
        self.entries.range((Excluded(key), Unbounded)).next()
    }

    /// Swap the value stored under `key`, returning the old one
    ///
    /// The key is not re-derived from the new value.
    pub fn replace(&mut self, key: u32, value: V) -> Result<V> {
        let slot = self.entries.get_mut(&key).ok_or(Error::KeyNotFound(key))?;
        Ok(std::mem::replace(slot, value))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&u32, &V)> {
        self.entries.iter()
    }

    /// Keys in order
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }
}
