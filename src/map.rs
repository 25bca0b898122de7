//! Ordered map type for decoded STC maps.
//!
//! [`StcMap`] wraps an [`IndexMap`] so that map entries come back in the order their
//! keys first appeared in the document. Equality ignores that order, so two maps
//! holding the same entries compare equal however the source was arranged.
//!
//! ## Examples
//!
//! ```rust
//! use serde_stc::{StcMap, Value};
//!
//! let mut map = StcMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;

/// An insertion-ordered map of string keys to STC values.
///
/// # Examples
///
/// ```rust
/// use serde_stc::{StcMap, Value};
///
/// let mut map = StcMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StcMap(IndexMap<String, crate::Value>);

impl StcMap {
    /// Creates an empty `StcMap`.
    #[must_use]
    pub fn new() -> Self {
        StcMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        StcMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and the
    /// key keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

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

impl From<IndexMap<String, crate::Value>> for StcMap {
    fn from(map: IndexMap<String, crate::Value>) -> Self {
        StcMap(map)
    }
}

impl From<StcMap> for IndexMap<String, crate::Value> {
    fn from(map: StcMap) -> Self {
        map.0
    }
}

impl IntoIterator for StcMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StcMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for StcMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        StcMap(IndexMap::from_iter(iter))
    }
}
