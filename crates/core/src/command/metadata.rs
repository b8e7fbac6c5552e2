//! Ordered multi-valued flag store used by the image tools builder

use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Key of a metadata entry.
///
/// Unkeyed values are rendered as bare positional tokens. The empty string is
/// reserved for them: `MetadataKey::from("")` is always [`MetadataKey::Unkeyed`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    Unkeyed,
    Flag(String),
}

impl MetadataKey {
    pub fn as_str(&self) -> &str {
        match self {
            MetadataKey::Unkeyed => "",
            MetadataKey::Flag(flag) => flag,
        }
    }

    pub fn is_unkeyed(&self) -> bool {
        matches!(self, MetadataKey::Unkeyed)
    }
}

impl From<&str> for MetadataKey {
    fn from(key: &str) -> Self {
        if key.is_empty() {
            MetadataKey::Unkeyed
        } else {
            MetadataKey::Flag(key.to_string())
        }
    }
}

impl From<String> for MetadataKey {
    fn from(key: String) -> Self {
        if key.is_empty() {
            MetadataKey::Unkeyed
        } else {
            MetadataKey::Flag(key)
        }
    }
}

impl From<Option<&str>> for MetadataKey {
    fn from(key: Option<&str>) -> Self {
        key.map(MetadataKey::from).unwrap_or(MetadataKey::Unkeyed)
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MetadataEntry {
    key: MetadataKey,
    values: Vec<String>,
}

/// Insertion-ordered map from flag to one or more values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataStore {
    entries: Vec<MetadataEntry>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a JSON object, keeping the object's key order
    pub fn from_json_object(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::InvalidArgument(format!(
                "metadata must be a JSON object, got {value}"
            )));
        };

        let mut store = Self::new();
        for (key, value) in map {
            store.add_json(key.as_str(), value)?;
        }
        Ok(store)
    }

    /// Append `value` to the list for `key`, creating the key if absent
    pub fn add(&mut self, key: impl Into<MetadataKey>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.values.push(value),
            None => self.entries.push(MetadataEntry {
                key,
                values: vec![value],
            }),
        }
    }

    /// Append a JSON value under `key`.
    ///
    /// Strings are taken verbatim, numbers and booleans are stringified and
    /// arrays append each element. `null` and objects are rejected.
    pub fn add_json(&mut self, key: impl Into<MetadataKey>, value: &Value) -> Result<()> {
        let key = key.into();
        match value {
            Value::Array(items) => {
                // Validate everything first so a bad element leaves the store untouched
                let values = items
                    .iter()
                    .map(|item| scalar_to_string(&key, item))
                    .collect::<Result<Vec<_>>>()?;
                for value in values {
                    self.add(key.clone(), value);
                }
                Ok(())
            }
            other => {
                let value = scalar_to_string(&key, other)?;
                self.add(key, value);
                Ok(())
            }
        }
    }

    /// Replace every value for `key`; other keys are untouched
    pub fn set<I, S>(&mut self, key: impl Into<MetadataKey>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.values = values,
            None => self.entries.push(MetadataEntry { key, values }),
        }
    }

    /// Values for `key` in insertion order; empty when the key is absent
    pub fn get(&self, key: &str) -> &[String] {
        self.find(key)
            .map(|entry| entry.values.as_slice())
            .unwrap_or(&[])
    }

    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.get(key).first().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|entry| entry.key.as_str() != key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Walk `(key, values)` pairs in the order keys were first added.
    /// Every call starts a fresh walk.
    pub fn entries(&self) -> impl Iterator<Item = (&MetadataKey, &[String])> + '_ {
        self.entries
            .iter()
            .map(|entry| (&entry.key, entry.values.as_slice()))
    }

    /// Number of distinct keys
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, key: &str) -> Option<&MetadataEntry> {
        self.entries.iter().find(|entry| entry.key.as_str() == key)
    }
}

impl Serialize for MetadataStore {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.entries().map(|(key, values)| (key.as_str(), values)))
    }
}

fn scalar_to_string(key: &MetadataKey, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(Error::InvalidArgument(format!(
            "metadata value for '{key}' must not be null"
        ))),
        Value::Array(_) | Value::Object(_) => Err(Error::InvalidArgument(format!(
            "metadata value for '{key}' must be a string, got {value}"
        ))),
    }
}
