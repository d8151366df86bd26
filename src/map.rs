//! Ordered map type for extracted objects.
//!
//! This module provides [`AttrMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object fields. Order matters here: the tree
//! builder inserts keys in the deterministic order produced by the attribute
//! sorter, so two extractions of the same pairs always yield identically
//! ordered objects.
//!
//! ## Why IndexMap?
//!
//! - **Deterministic output**: fields iterate in a consistent order
//! - **Spec'd construction order**: insertion order *is* the processing order
//! - **Predictable tests**: serialized output is stable across runs
//!
//! ## Examples
//!
//! ```rust
//! use attrson::{AttrMap, Value};
//!
//! let mut map = AttrMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to extracted values.
///
/// This is a thin wrapper around [`IndexMap`]; the root of every extraction
/// is an `AttrMap`, as is every nested object.
///
/// # Examples
///
/// ```rust
/// use attrson::{AttrMap, Value};
///
/// let mut map = AttrMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttrMap(IndexMap<String, crate::Value>);

impl AttrMap {
    /// Creates an empty `AttrMap`.
    #[must_use]
    pub fn new() -> Self {
        AttrMap(IndexMap::new())
    }

    /// Creates an empty `AttrMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AttrMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrson::{AttrMap, Value};
    ///
    /// let mut map = AttrMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Gets the entry for a key, for in-place insertion or mutation.
    pub fn entry(&mut self, key: String) -> indexmap::map::Entry<'_, String, crate::Value> {
        self.0.entry(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for AttrMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        AttrMap(map.into_iter().collect())
    }
}

impl From<AttrMap> for HashMap<String, crate::Value> {
    fn from(map: AttrMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for AttrMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        AttrMap(IndexMap::from_iter(iter))
    }
}
