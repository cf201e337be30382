use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ResponseValue;

/// Accumulated answers for an interview, keyed by string.
///
/// The engine treats this as an opaque store: values come in through
/// `answer`/`skip`, are handed out as clones to the Script and Moderator,
/// and are delivered to the completion callback at the end of the flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseData {
    values: HashMap<String, ResponseValue>,
}

impl ResponseData {
    /// Create a new empty response store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert a value under the given key, overwriting any existing value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ResponseValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the value under the given key.
    pub fn get(&self, key: &str) -> Option<&ResponseValue> {
        self.values.get(key)
    }

    /// Check if a value exists under the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove the value under the given key.
    pub fn remove(&mut self, key: &str) -> Option<ResponseValue> {
        self.values.remove(key)
    }

    /// Get an iterator over all key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ResponseValue)> {
        self.values.iter()
    }

    /// Get the number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Shallow-merge another store into this one.
    ///
    /// Keys present in `other` overwrite existing entries; keys absent from
    /// `other` are left untouched.
    pub fn merge(&mut self, other: ResponseData) {
        self.values.extend(other.values);
    }
}

impl IntoIterator for ResponseData {
    type Item = (String, ResponseValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResponseData {
    type Item = (&'a String, &'a ResponseValue);
    type IntoIter = std::collections::hash_map::Iter<'a, String, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<ResponseValue>> FromIterator<(K, V)> for ResponseData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
