//! Insertion-ordered compound type.
//!
//! This module provides [`Compound`], a wrapper around [`IndexMap`] that keeps
//! entries in the order they were first inserted. Re-inserting an existing key
//! replaces the value in place without moving the entry, which is also how the
//! binary decoder and the SNBT parser treat duplicate keys.
//!
//! ## Examples
//!
//! ```rust
//! use nbt_snbt::{Compound, Tag};
//!
//! let mut map = Compound::new();
//! map.insert("b", Tag::Int(1));
//! map.insert("a", Tag::Int(2));
//! map.insert("b", Tag::Int(3));
//!
//! let keys: Vec<_> = map.keys().map(String::as_str).collect();
//! assert_eq!(keys, ["b", "a"]);
//! assert_eq!(map.get("b"), Some(&Tag::Int(3)));
//! ```

use indexmap::IndexMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::Tag;

/// An ordered map of string keys to tags.
///
/// Equality ignores entry order, like any map; iteration and encoding follow
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound(IndexMap<String, Tag>);

impl Compound {
    /// Creates an empty `Compound`.
    #[must_use]
    pub fn new() -> Self {
        Compound(IndexMap::new())
    }

    /// Creates an empty `Compound` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Compound(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair.
    ///
    /// If the key was already present its value is replaced in place and the
    /// old value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Tag>) -> Option<Tag> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tag> {
        self.0.get_mut(key)
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Tag> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Tag> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Tag> {
        self.0.iter()
    }

    /// Returns a mutable iterator over the entries, in insertion order.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Tag> {
        self.0.iter_mut()
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn as_index_map(&self) -> &IndexMap<String, Tag> {
        &self.0
    }

    /// Returns `true` if every value is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.values().all(Tag::is_valid)
    }
}

// Entry hashes are combined with a commutative sum so that the hash agrees
// with the order-insensitive equality.
impl Hash for Compound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sum: u64 = 0;
        for (key, value) in &self.0 {
            let mut entry = DefaultHasher::new();
            key.hash(&mut entry);
            value.hash(&mut entry);
            sum = sum.wrapping_add(entry.finish());
        }
        self.0.len().hash(state);
        sum.hash(state);
    }
}

impl From<IndexMap<String, Tag>> for Compound {
    fn from(map: IndexMap<String, Tag>) -> Self {
        Compound(map)
    }
}

impl From<Compound> for IndexMap<String, Tag> {
    fn from(map: Compound) -> Self {
        map.0
    }
}

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = indexmap::map::IntoIter<String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = indexmap::map::Iter<'a, String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Tag)> for Compound {
    fn from_iter<T: IntoIterator<Item = (K, Tag)>>(iter: T) -> Self {
        Compound(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>> Extend<(K, Tag)> for Compound {
    fn extend<T: IntoIterator<Item = (K, Tag)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.0.insert(k.into(), v);
        }
    }
}
