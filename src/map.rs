//! Ordered map type for TSON objects.
//!
//! [`TsonMap`] wraps [`IndexMap`] so object members iterate in the order
//! their names were first seen. Re-assigning an existing name replaces the
//! value in place: the member keeps its original slot rather than moving to
//! the end. This is exactly how a TSON object with a duplicated member name
//! decodes.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tson::{TsonMap, Value};
//!
//! let mut map = TsonMap::new();
//! map.insert("a".to_string(), Value::from(1));
//! map.insert("b".to_string(), Value::from(2));
//! map.insert("a".to_string(), Value::from(3));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["a", "b"]);
//! assert_eq!(map.get("a").and_then(|v| v.as_i64()), Some(3));
//! ```

use indexmap::IndexMap;

/// An insertion-ordered map of member names to TSON values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TsonMap(IndexMap<String, crate::Value>);

impl TsonMap {
    #[must_use]
    pub fn new() -> Self {
        TsonMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TsonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a member, returning the previous value for `key` if any.
    ///
    /// An existing key keeps its position; only the value changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tson::{TsonMap, Value};
    ///
    /// let mut map = TsonMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert_eq!(map.insert("key".to_string(), Value::from(43)), Some(Value::from(42)));
    /// ```
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

    /// Returns an iterator over the member names, in first-seen order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over `(name, value)` pairs, in first-seen order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl IntoIterator for TsonMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TsonMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for TsonMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        TsonMap(IndexMap::from_iter(iter))
    }
}
