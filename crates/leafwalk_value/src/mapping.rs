//! Mapping values.

use std::collections::HashMap;
use std::collections::hash_map;

use crate::Value;

/// Key of a [`Mapping`].
///
/// Keys are never walked; they only need to be hashable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapKey {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl From<&str> for MapKey {
    fn from(value: &str) -> Self {
        MapKey::Text(value.to_string())
    }
}

impl From<String> for MapKey {
    fn from(value: String) -> Self {
        MapKey::Text(value)
    }
}

impl From<i64> for MapKey {
    fn from(value: i64) -> Self {
        MapKey::Int(value)
    }
}

impl From<i32> for MapKey {
    fn from(value: i32) -> Self {
        MapKey::Int(i64::from(value))
    }
}

impl From<bool> for MapKey {
    fn from(value: bool) -> Self {
        MapKey::Bool(value)
    }
}

impl std::fmt::Display for MapKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapKey::Text(s) => f.write_str(s),
            MapKey::Int(i) => write!(f, "{}", i),
            MapKey::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Unordered association from unique keys to values.
///
/// Iteration order is unspecified and may differ between runs.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: HashMap<MapKey, Value>,
}

impl Mapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the value previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<MapKey>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn entry(mut self, key: impl Into<MapKey>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &MapKey) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Iterates over stored values in unspecified order.
    pub fn values(&self) -> hash_map::Values<'_, MapKey, Value> {
        self.entries.values()
    }

    /// Iterates over entries in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, MapKey, Value> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<MapKey>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
